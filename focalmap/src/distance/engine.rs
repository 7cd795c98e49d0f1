//! Nearest-group distances and per-kind aggregation.
//!
//! Column names produced here are the output contract with the report layer:
//!
//! | kind      | names                                                     |
//! |-----------|-----------------------------------------------------------|
//! | plazas    | `DIST_<plazaKey>` per plaza, then `DIST_MIN_PR_PLAZA`     |
//! | roads     | `DIST_ROAD`                                               |
//! | districts | `DIST_<districtId>` per district, then `DIST_DST_<CODE>`  |

use std::collections::BTreeMap;

use super::map::DistanceMap;
use super::metric::{distance_to, DistanceMetric};
use crate::focal::{DistrictCategory, FocalPointCollection, FocalPointGroup, FocalPointKind};

/// Minimum distance to any peripheral plaza.
pub const MIN_PERIPHERAL_PLAZA: &str = "DIST_MIN_PR_PLAZA";

/// Minimum distance to any road.
pub const ROAD: &str = "DIST_ROAD";

/// Plaza keys containing any of these are not peripheral.
pub const NON_PERIPHERAL_MARKERS: &[&str] = &["CENTRAL", "PIXEL"];

/// Column name for an individual group distance.
pub fn group_column(id: &str) -> String {
    format!("DIST_{}", id)
}

/// Column name for a district category aggregate.
pub fn category_column(category: DistrictCategory) -> String {
    format!("DIST_DST_{}", category.code())
}

/// Returns true if the plaza key denotes a peripheral plaza.
pub fn is_peripheral_plaza(key: &str) -> bool {
    !NON_PERIPHERAL_MARKERS.iter().any(|m| key.contains(m))
}

/// Minimum distance from `(x, y)` to any member of the group.
///
/// An empty group yields `0`.
pub fn nearest_in_group(x: i32, y: i32, group: &FocalPointGroup, metric: DistanceMetric) -> f64 {
    min_or_zero(
        group
            .parcel_coords
            .iter()
            .map(|point| distance_to(x, y, *point, metric)),
    )
}

/// Named distances from `(x, y)` to every group of the given kind.
pub fn compute_distances(
    collection: &FocalPointCollection,
    x: i32,
    y: i32,
    kind: FocalPointKind,
    metric: DistanceMetric,
) -> DistanceMap {
    match kind {
        FocalPointKind::Plazas => plaza_distances(collection, x, y, metric),
        FocalPointKind::Roads => road_distances(collection, x, y, metric),
        FocalPointKind::Districts => district_distances(collection, x, y, metric),
    }
}

fn plaza_distances(
    collection: &FocalPointCollection,
    x: i32,
    y: i32,
    metric: DistanceMetric,
) -> DistanceMap {
    let mut distances = DistanceMap::new();
    let mut peripheral = Vec::new();

    for (key, plaza) in collection.plazas() {
        let d = nearest_in_group(x, y, plaza, metric);
        distances.insert(group_column(key), d);
        if is_peripheral_plaza(key) {
            peripheral.push(d);
        }
    }

    distances.insert(MIN_PERIPHERAL_PLAZA, min_or_zero(peripheral));
    distances
}

fn road_distances(
    collection: &FocalPointCollection,
    x: i32,
    y: i32,
    metric: DistanceMetric,
) -> DistanceMap {
    let nearest = min_or_zero(
        collection
            .roads()
            .values()
            .map(|road| nearest_in_group(x, y, road, metric)),
    );

    let mut distances = DistanceMap::new();
    distances.insert(ROAD, nearest);
    distances
}

fn district_distances(
    collection: &FocalPointCollection,
    x: i32,
    y: i32,
    metric: DistanceMetric,
) -> DistanceMap {
    let mut distances = DistanceMap::new();
    let mut by_category: BTreeMap<DistrictCategory, Vec<f64>> = BTreeMap::new();

    for district in collection.districts().values() {
        let d = nearest_in_group(x, y, district, metric);
        distances.insert(group_column(&district.id), d);

        if let Some(category) = district.category.filter(DistrictCategory::is_mapped) {
            by_category.entry(category).or_default().push(d);
        }
    }

    for category in DistrictCategory::AGGREGATED {
        if let Some(values) = by_category.remove(&category) {
            distances.insert(category_column(category), min_or_zero(values));
        }
    }

    distances
}

fn min_or_zero(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().reduce(f64::min).unwrap_or(0.0)
}
