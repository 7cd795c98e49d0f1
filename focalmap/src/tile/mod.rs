//! Tile classification.
//!
//! Partitions raw tile records by declared type and groups them by the region
//! identifier each tile carries. The result feeds the focal point builder.
//!
//! ```text
//! raw tiles ──► filter (road | plaza | district) ──► group by region id
//!                                                    ├── plazas
//!                                                    ├── roads
//!                                                    └── districts
//! ```

mod types;

pub use types::{Tile, TileType};

use std::collections::{BTreeMap, BTreeSet};

use crate::coord::ParcelCoord;

/// Coordinates grouped by region identifier.
pub type RegionTiles = BTreeMap<String, BTreeSet<ParcelCoord>>;

/// Tiles partitioned by type and grouped by region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedTiles {
    pub plazas: RegionTiles,
    pub roads: RegionTiles,
    pub districts: RegionTiles,

    /// Focal tiles that carried no region identifier and could not be grouped.
    pub unassigned: usize,

    /// Tiles of any other type.
    pub ignored: usize,
}

impl ClassifiedTiles {
    /// Total number of coordinates across all plaza regions.
    pub fn plaza_parcel_count(&self) -> usize {
        self.plazas.values().map(BTreeSet::len).sum()
    }

    /// Total number of coordinates across all road regions.
    pub fn road_parcel_count(&self) -> usize {
        self.roads.values().map(BTreeSet::len).sum()
    }
}

/// Classifies raw tiles into plaza, road and district regions.
pub fn classify_tiles<'a, I>(tiles: I) -> ClassifiedTiles
where
    I: IntoIterator<Item = &'a Tile>,
{
    let mut classified = ClassifiedTiles::default();

    for tile in tiles {
        let regions = match tile.tile_type {
            TileType::Plaza => &mut classified.plazas,
            TileType::Road => &mut classified.roads,
            TileType::District => &mut classified.districts,
            TileType::Other => {
                classified.ignored += 1;
                continue;
            }
        };

        match tile.region_id.as_deref() {
            Some(region) if !region.is_empty() => {
                regions
                    .entry(region.to_string())
                    .or_default()
                    .insert(tile.coord());
            }
            _ => {
                tracing::warn!(
                    x = tile.x,
                    y = tile.y,
                    tile_type = ?tile.tile_type,
                    "Focal tile has no region identifier, skipping"
                );
                classified.unassigned += 1;
            }
        }
    }

    tracing::debug!(
        plazas = classified.plazas.len(),
        roads = classified.roads.len(),
        districts = classified.districts.len(),
        unassigned = classified.unassigned,
        ignored = classified.ignored,
        "Classified tiles"
    );

    classified
}
