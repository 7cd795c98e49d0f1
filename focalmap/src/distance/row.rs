//! Flattened per-asset rows and their column dictionary.

use std::collections::BTreeSet;

use super::engine::{category_column, group_column, MIN_PERIPHERAL_PLAZA, ROAD};
use crate::focal::FocalPointCollection;

/// Distances for one asset as ordered `(column, value)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRow {
    asset_id: String,
    entries: Vec<(String, f64)>,
}

impl DistanceRow {
    pub fn new(asset_id: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// Append columns in order.
    pub fn extend<'a>(&mut self, entries: impl IntoIterator<Item = (&'a str, f64)>) {
        self.entries
            .extend(entries.into_iter().map(|(name, value)| (name.to_string(), value)));
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| *value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }
}

/// An output column and what it measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceColumn {
    pub key: String,
    pub description: String,
}

impl DistanceColumn {
    fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Columns produced for the collection, in row order.
///
/// Matches [`DistanceContext::row_for_asset`](super::DistanceContext::row_for_asset)
/// for the same collection, including the de-duplication of shared district ids.
pub fn distance_columns(collection: &FocalPointCollection) -> Vec<DistanceColumn> {
    let mut columns = Vec::new();

    for (key, plaza) in collection.plazas() {
        columns.push(DistanceColumn::new(
            group_column(key),
            format!("Distance to plaza {}", plaza.name),
        ));
    }
    columns.push(DistanceColumn::new(
        MIN_PERIPHERAL_PLAZA,
        "Distance to the nearest peripheral plaza",
    ));

    columns.push(DistanceColumn::new(ROAD, "Distance to the nearest road"));

    // Rows keep the first value of a repeated key; so does the column list.
    // A district id shared with another district takes the later name.
    let district_start = columns.len();
    for district in collection.districts().values() {
        let key = group_column(&district.id);
        let description = format!("Distance to district {}", district.name);
        match columns.iter().position(|c| c.key == key) {
            Some(i) if i >= district_start => columns[i].description = description,
            Some(_) => {}
            None => columns.push(DistanceColumn::new(key, description)),
        }
    }
    for category in collection.district_categories() {
        columns.push(DistanceColumn::new(
            category_column(category),
            format!(
                "Distance to the nearest {} district",
                category.label().unwrap_or(category.code())
            ),
        ));
    }

    columns
}

/// Column names produced by more than one focal point kind.
///
/// A district whose derived id equals a plaza key, or that spells out an
/// aggregate name such as `ROAD`, yields a column that a row already carries.
/// Only the first value survives in reports.
pub fn column_collisions(collection: &FocalPointCollection) -> Vec<String> {
    let mut plaza_columns: BTreeSet<String> =
        collection.plazas().keys().map(|key| group_column(key)).collect();
    plaza_columns.insert(MIN_PERIPHERAL_PLAZA.to_string());

    let road_columns: BTreeSet<String> = [ROAD.to_string()].into();

    let mut district_columns: BTreeSet<String> = collection
        .districts()
        .values()
        .map(|district| group_column(&district.id))
        .collect();
    district_columns.extend(collection.district_categories().into_iter().map(category_column));

    let mut collisions: BTreeSet<String> = plaza_columns
        .intersection(&road_columns)
        .cloned()
        .collect();
    collisions.extend(plaza_columns.intersection(&district_columns).cloned());
    collisions.extend(road_columns.intersection(&district_columns).cloned());
    collisions.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Asset;
    use crate::coord::ParcelCoord;
    use crate::distance::{DistanceContext, DistanceMetric};
    use crate::focal::{DistrictCategory, FocalPointGroup, GroupMap};

    fn collection() -> FocalPointCollection {
        let mut plazas = GroupMap::new();
        for (key, name) in [("CENTRAL_PLAZA", "Central Genesis Plaza"), ("NORTH_PLAZA", "North Genesis Plaza")] {
            plazas.insert(
                key.to_string(),
                FocalPointGroup::new(key, key, name, [ParcelCoord::new(0, 0)].into()),
            );
        }

        let mut roads = GroupMap::new();
        roads.insert(
            "r1".to_string(),
            FocalPointGroup::new("r1", "r1", "Road r1", [ParcelCoord::new(1, 0)].into()),
        );

        let mut districts = GroupMap::new();
        for (key, id, category) in [
            ("d1", "VEGA_CITY", DistrictCategory::Gaming),
            ("d2", "UNIV", DistrictCategory::CultureEducation),
            ("d3", "VEGA_CITY", DistrictCategory::Business),
            ("d4", "FASH_STRE", DistrictCategory::Unmapped),
        ] {
            districts.insert(
                key.to_string(),
                FocalPointGroup::new(key, id, id, [ParcelCoord::new(2, 2)].into())
                    .with_category(category),
            );
        }

        FocalPointCollection::new(plazas, roads, districts)
    }

    #[test]
    fn test_columns_match_row_order() {
        let collection = collection();
        let columns = distance_columns(&collection);

        let mut ctx = DistanceContext::new(collection);
        let row = ctx.row_for_asset(&Asset::land("a", 5, 5), DistanceMetric::Manhattan);

        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, row.columns().collect::<Vec<_>>());
    }

    #[test]
    fn test_column_layout() {
        let keys: Vec<String> = distance_columns(&collection())
            .into_iter()
            .map(|c| c.key)
            .collect();

        assert_eq!(
            keys,
            vec![
                "DIST_CENTRAL_PLAZA",
                "DIST_NORTH_PLAZA",
                "DIST_MIN_PR_PLAZA",
                "DIST_ROAD",
                "DIST_VEGA_CITY",
                "DIST_UNIV",
                "DIST_FASH_STRE",
                "DIST_DST_CULT_EDU",
                "DIST_DST_GAMING",
                "DIST_DST_BUSINESS",
            ]
        );
    }

    #[test]
    fn test_column_descriptions() {
        let columns = distance_columns(&collection());

        assert_eq!(columns[1].description, "Distance to plaza North Genesis Plaza");
        let cult = columns.iter().find(|c| c.key == "DIST_DST_CULT_EDU").unwrap();
        assert_eq!(
            cult.description,
            "Distance to the nearest Culture and Education district"
        );
    }

    #[test]
    fn test_distinct_layout_has_no_collisions() {
        assert!(column_collisions(&collection()).is_empty());
    }

    #[test]
    fn test_district_spelling_an_aggregate_collides() {
        let mut districts = GroupMap::new();
        districts.insert(
            "d9".to_string(),
            FocalPointGroup::new("d9", "ROAD", "Road", [ParcelCoord::new(9, 9)].into())
                .with_category(DistrictCategory::Gaming),
        );
        let collection = FocalPointCollection::new(GroupMap::new(), GroupMap::new(), districts);

        assert_eq!(column_collisions(&collection), vec!["DIST_ROAD".to_string()]);

        let columns = distance_columns(&collection);
        let road: Vec<_> = columns.iter().filter(|c| c.key == "DIST_ROAD").collect();
        assert_eq!(road.len(), 1);
        assert_eq!(road[0].description, "Distance to the nearest road");
    }

    #[test]
    fn test_district_sharing_a_plaza_key_collides() {
        let mut plazas = GroupMap::new();
        plazas.insert(
            "NORT_GENE".to_string(),
            FocalPointGroup::new("NORT_GENE", "NORT_GENE", "North Genesis", [ParcelCoord::new(0, 0)].into()),
        );
        let mut districts = GroupMap::new();
        districts.insert(
            "d1".to_string(),
            FocalPointGroup::new("d1", "NORT_GENE", "North Genesis Plaza", [ParcelCoord::new(5, 5)].into())
                .with_category(DistrictCategory::Business),
        );
        let collection = FocalPointCollection::new(plazas, GroupMap::new(), districts);

        assert_eq!(column_collisions(&collection), vec!["DIST_NORT_GENE".to_string()]);
        let columns = distance_columns(&collection);
        assert_eq!(columns[0].description, "Distance to plaza North Genesis");
    }

    #[test]
    fn test_row_lookup() {
        let mut row = DistanceRow::new("a");
        row.extend([("DIST_ROAD", 3.0)]);
        assert_eq!(row.get("DIST_ROAD"), Some(3.0));
        assert_eq!(row.get("DIST_OTHER"), None);
        assert_eq!(row.entries().len(), 1);
    }
}
