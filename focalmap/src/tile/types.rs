//! Raw map tile records.

use serde::{Deserialize, Serialize};

use crate::coord::ParcelCoord;

/// Declared type of a map tile.
///
/// Only roads, plazas and districts take part in focal point grouping; every
/// other tile type (owned parcels, unowned parcels, ...) is folded into
/// [`TileType::Other`] and dropped by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Road,
    Plaza,
    District,
    #[serde(other)]
    Other,
}

/// One grid cell of the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,

    #[serde(rename = "type")]
    pub tile_type: TileType,

    /// Identifier shared by all tiles of the same plaza or road segment.
    #[serde(
        default,
        rename = "regionId",
        alias = "estateId",
        alias = "estate_id",
        alias = "region_id"
    )]
    pub region_id: Option<String>,

    /// Reference to the on-chain asset backing this tile, if any.
    #[serde(
        default,
        rename = "assetRef",
        alias = "nftId",
        alias = "nft_id",
        alias = "asset_ref"
    )]
    pub asset_ref: Option<String>,
}

impl Tile {
    /// Create a tile without an asset reference.
    pub fn new(x: i32, y: i32, tile_type: TileType, region_id: Option<&str>) -> Self {
        Self {
            x,
            y,
            tile_type,
            region_id: region_id.map(str::to_string),
            asset_ref: None,
        }
    }

    /// Grid coordinate of this tile.
    #[inline]
    pub fn coord(&self) -> ParcelCoord {
        ParcelCoord::new(self.x, self.y)
    }
}
