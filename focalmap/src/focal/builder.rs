//! Focal point group builder.
//!
//! Turns classified tiles, district definitions and the plaza name lookup into
//! a [`FocalPointCollection`]. This is the offline preprocessing pass; its
//! output is persisted by the store and re-run only when map data changes.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use super::naming::district_name_to_id;
use super::types::{
    DistrictCategory, FocalPointCollection, FocalPointGroup, FocalPointKind, GroupMap,
    RESERVED_CATEGORIES,
};
use crate::coord::{parse_parcel, CoordError, ParcelCoord};
use crate::distance::column_collisions;
use crate::source::{DistrictDefinition, PlazaNames};
use crate::tile::{classify_tiles, ClassifiedTiles, RegionTiles, Tile};

/// Errors that can occur while building focal point groups.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A district parcel entry is not a valid `"x,y"` coordinate.
    #[error("district {district_id} ({district_name}) has malformed parcel {entry:?}: {source}")]
    MalformedParcel {
        district_id: String,
        district_name: String,
        entry: String,
        #[source]
        source: CoordError,
    },
}

/// Counts reported after a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub plazas: usize,
    pub plaza_parcels: usize,
    pub roads: usize,
    pub road_parcels: usize,
    pub districts: usize,
    pub district_parcels: usize,
    /// District definitions skipped because of a reserved category.
    pub reserved_districts: usize,
    /// Districts whose category label is not in the category table.
    pub unmapped_districts: usize,
    /// Focal tiles with no region identifier.
    pub unassigned_tiles: usize,
    /// Plaza tile regions absent from the plaza name lookup, dropped.
    pub unlisted_plaza_regions: usize,
    /// Plaza name lookup entries with no tiles, skipped.
    pub plazas_without_tiles: usize,
    /// Output columns produced by more than one focal point kind.
    pub column_collisions: usize,
}

/// Build the focal point collection from raw tiles.
pub fn build_focal_points(
    tiles: &[Tile],
    districts: &[DistrictDefinition],
    plaza_names: &PlazaNames,
) -> Result<(FocalPointCollection, BuildSummary), BuildError> {
    let classified = classify_tiles(tiles);
    build_from_classified(&classified, districts, plaza_names)
}

/// Build the focal point collection from already classified tiles.
pub fn build_from_classified(
    classified: &ClassifiedTiles,
    districts: &[DistrictDefinition],
    plaza_names: &PlazaNames,
) -> Result<(FocalPointCollection, BuildSummary), BuildError> {
    tracing::info!("Organizing plazas");
    let (plazas, unlisted_plaza_regions, plazas_without_tiles) =
        build_plazas(&classified.plazas, plaza_names);

    tracing::info!("Organizing roads");
    let roads = build_roads(&classified.roads);

    tracing::info!("Organizing districts");
    let (district_groups, reserved_districts) = build_districts(districts)?;

    let unmapped_districts = district_groups
        .values()
        .filter(|g| g.category == Some(DistrictCategory::Unmapped))
        .count();

    let collection = FocalPointCollection::new(plazas, roads, district_groups);

    let collisions = column_collisions(&collection);
    for column in &collisions {
        tracing::warn!(
            column = %column,
            "Column produced by more than one focal point kind, reports keep the first value"
        );
    }

    let summary = BuildSummary {
        plazas: collection.plazas().len(),
        plaza_parcels: collection.parcel_count(FocalPointKind::Plazas),
        roads: collection.roads().len(),
        road_parcels: collection.parcel_count(FocalPointKind::Roads),
        districts: collection.districts().len(),
        district_parcels: collection.parcel_count(FocalPointKind::Districts),
        reserved_districts,
        unmapped_districts,
        unassigned_tiles: classified.unassigned,
        unlisted_plaza_regions,
        plazas_without_tiles,
        column_collisions: collisions.len(),
    };

    tracing::info!(
        plazas = summary.plazas,
        roads = summary.roads,
        districts = summary.districts,
        reserved = summary.reserved_districts,
        unmapped = summary.unmapped_districts,
        unlisted_plazas = summary.unlisted_plaza_regions,
        collisions = summary.column_collisions,
        "Built focal point groups"
    );

    Ok((collection, summary))
}

/// One group per plaza listed in the name lookup; id and name come from it.
///
/// Returns the groups, the number of plaza tile regions missing from the
/// lookup and the number of lookup entries without tiles. Neither produces a
/// group.
fn build_plazas(regions: &RegionTiles, plaza_names: &PlazaNames) -> (GroupMap, usize, usize) {
    let mut groups = GroupMap::new();
    let mut unlisted = 0;

    for (region_id, coords) in regions {
        let Some(plaza) = plaza_names.get(region_id) else {
            tracing::warn!(
                region_id = %region_id,
                parcels = coords.len(),
                "Plaza region missing from name lookup, dropping"
            );
            unlisted += 1;
            continue;
        };
        let group = FocalPointGroup::new(&plaza.id, &plaza.id, &plaza.name, coords.clone())
            .with_region_id(region_id);

        if let Some(existing) = groups.get(&group.group_key) {
            tracing::warn!(
                id = %group.id,
                first_region = ?existing.region_id,
                second_region = %region_id,
                "Two plaza regions share an id, keeping the first"
            );
            continue;
        }
        groups.insert(group.group_key.clone(), group);
    }

    let mut without_tiles = 0;
    for (region_id, plaza) in plaza_names {
        if !regions.contains_key(region_id) {
            tracing::warn!(
                region_id = %region_id,
                id = %plaza.id,
                "Plaza in name lookup has no tiles, skipping"
            );
            without_tiles += 1;
        }
    }

    (groups, unlisted, without_tiles)
}

/// One group per road segment, named after its identifier.
fn build_roads(regions: &RegionTiles) -> GroupMap {
    regions
        .iter()
        .map(|(region_id, coords)| {
            let group = FocalPointGroup::new(
                region_id,
                region_id,
                format!("Road {}", region_id),
                coords.clone(),
            )
            .with_region_id(region_id);
            (region_id.clone(), group)
        })
        .collect()
}

/// One group per non-reserved district definition.
///
/// Returns the groups and the number of reserved definitions skipped.
fn build_districts(districts: &[DistrictDefinition]) -> Result<(GroupMap, usize), BuildError> {
    let mut groups = GroupMap::new();
    let mut reserved = 0;
    let mut ids: HashMap<String, String> = HashMap::new();

    for district in districts {
        if RESERVED_CATEGORIES.contains(&district.category.as_str()) {
            reserved += 1;
            continue;
        }

        let category = DistrictCategory::from_label(&district.category);
        if !category.is_mapped() {
            tracing::warn!(
                district = %district.name,
                category = %district.category,
                "Unrecognized district category"
            );
        }

        let coords = parse_district_parcels(district)?;
        let id = district_name_to_id(&district.name);

        if let Some(other) = ids.insert(id.clone(), district.name.clone()) {
            tracing::warn!(
                id = %id,
                first = %other,
                second = %district.name,
                "Two districts derive the same id"
            );
        }

        let group = FocalPointGroup::new(&district.id, id, &district.name, coords)
            .with_description(&district.description)
            .with_category(category);
        groups.insert(district.id.clone(), group);
    }

    Ok((groups, reserved))
}

/// Parse every parcel of a district, failing on the first malformed entry.
fn parse_district_parcels(
    district: &DistrictDefinition,
) -> Result<BTreeSet<ParcelCoord>, BuildError> {
    district
        .parcels
        .iter()
        .map(|entry| {
            parse_parcel(entry).map_err(|source| BuildError::MalformedParcel {
                district_id: district.id.clone(),
                district_name: district.name.clone(),
                entry: entry.clone(),
                source,
            })
        })
        .collect()
}
