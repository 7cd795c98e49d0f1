//! Focal point group types.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::ParcelCoord;

/// The three kinds of focal point a distance can be measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocalPointKind {
    Plazas,
    Roads,
    Districts,
}

impl FocalPointKind {
    /// All kinds, in output column order.
    pub const ALL: [FocalPointKind; 3] = [
        FocalPointKind::Plazas,
        FocalPointKind::Roads,
        FocalPointKind::Districts,
    ];

    /// Lowercase name used in files and logs.
    pub fn name(&self) -> &'static str {
        match self {
            FocalPointKind::Plazas => "plazas",
            FocalPointKind::Roads => "roads",
            FocalPointKind::Districts => "districts",
        }
    }
}

impl fmt::Display for FocalPointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a district focal point.
///
/// Source data carries free-text category labels; [`DistrictCategory::from_label`]
/// maps them through a fixed table. Labels outside the table map to
/// [`DistrictCategory::Unmapped`], which still yields an individual distance
/// but never contributes to a category aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DistrictCategory {
    #[serde(rename = "CULT_EDU")]
    CultureEducation,
    #[serde(rename = "POLITIC")]
    Politics,
    #[serde(rename = "GAMING")]
    Gaming,
    #[serde(rename = "BUSINESS")]
    Business,
    #[serde(rename = "SMALL")]
    Small,
    #[serde(rename = "UNMAPPED")]
    Unmapped,
}

/// Source category label to category, matched exactly.
const CATEGORY_LABELS: &[(&str, DistrictCategory)] = &[
    ("Culture and Education", DistrictCategory::CultureEducation),
    ("Politics", DistrictCategory::Politics),
    ("Gaming", DistrictCategory::Gaming),
    ("Business", DistrictCategory::Business),
    ("Small District", DistrictCategory::Small),
];

/// Source categories that are represented by plaza or road groups instead.
pub const RESERVED_CATEGORIES: &[&str] = &["Genesis Plaza", "Road"];

impl DistrictCategory {
    /// Categories that take part in aggregation, in output column order.
    pub const AGGREGATED: [DistrictCategory; 5] = [
        DistrictCategory::CultureEducation,
        DistrictCategory::Politics,
        DistrictCategory::Gaming,
        DistrictCategory::Business,
        DistrictCategory::Small,
    ];

    /// Map a source category label to a category.
    pub fn from_label(label: &str) -> Self {
        CATEGORY_LABELS
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, category)| *category)
            .unwrap_or(DistrictCategory::Unmapped)
    }

    /// Short code used in column names (`DIST_DST_<code>`).
    pub fn code(&self) -> &'static str {
        match self {
            DistrictCategory::CultureEducation => "CULT_EDU",
            DistrictCategory::Politics => "POLITIC",
            DistrictCategory::Gaming => "GAMING",
            DistrictCategory::Business => "BUSINESS",
            DistrictCategory::Small => "SMALL",
            DistrictCategory::Unmapped => "UNMAPPED",
        }
    }

    /// Source label for this category, if it has one.
    pub fn label(&self) -> Option<&'static str> {
        CATEGORY_LABELS
            .iter()
            .find(|(_, category)| category == self)
            .map(|(label, _)| *label)
    }

    /// Returns false for [`DistrictCategory::Unmapped`].
    pub fn is_mapped(&self) -> bool {
        !matches!(self, DistrictCategory::Unmapped)
    }
}

impl fmt::Display for DistrictCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DistrictCategory {
    type Err = String;

    /// Parses a category code (`CULT_EDU`, `POLITIC`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistrictCategory::AGGREGATED
            .into_iter()
            .chain([DistrictCategory::Unmapped])
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown district category code: {}", s))
    }
}

/// A named region used as a distance reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocalPointGroup {
    /// Key of this group in its collection mapping.
    #[serde(skip)]
    pub group_key: String,

    /// Identifier used in output column names.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Region identifier of the source tiles (plazas and roads only).
    #[serde(default)]
    pub region_id: Option<String>,

    /// Free-text description (districts only).
    #[serde(default)]
    pub description: Option<String>,

    /// District category; `None` for plazas and roads.
    #[serde(default)]
    pub category: Option<DistrictCategory>,

    /// Number of member coordinates.
    pub parcel_count: usize,

    /// Member coordinates, unique and ordered.
    pub parcel_coords: BTreeSet<ParcelCoord>,
}

impl FocalPointGroup {
    /// Create a group from its member coordinates.
    ///
    /// `parcel_count` is always derived from the deduplicated coordinates.
    pub fn new(
        group_key: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        parcel_coords: BTreeSet<ParcelCoord>,
    ) -> Self {
        Self {
            group_key: group_key.into(),
            id: id.into(),
            name: name.into(),
            region_id: None,
            description: None,
            category: None,
            parcel_count: parcel_coords.len(),
            parcel_coords,
        }
    }

    /// Set the source region identifier.
    pub fn with_region_id(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = Some(region_id.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the district category.
    pub fn with_category(mut self, category: DistrictCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns true if the group has no member coordinates.
    pub fn is_empty(&self) -> bool {
        self.parcel_coords.is_empty()
    }
}

/// Groups of one kind, keyed by group key.
pub type GroupMap = BTreeMap<String, FocalPointGroup>;

/// The complete set of focal point groups.
///
/// Built once by the group builder (or loaded from the store) and read-only
/// afterwards: there are no mutating accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocalPointCollection {
    #[serde(default, deserialize_with = "deserialize_keyed")]
    plazas: GroupMap,
    #[serde(default, deserialize_with = "deserialize_keyed")]
    roads: GroupMap,
    #[serde(default, deserialize_with = "deserialize_keyed")]
    districts: GroupMap,
}

impl FocalPointCollection {
    /// Assemble a collection. Group keys are taken from the map keys.
    pub fn new(plazas: GroupMap, roads: GroupMap, districts: GroupMap) -> Self {
        Self {
            plazas: rekey(plazas),
            roads: rekey(roads),
            districts: rekey(districts),
        }
    }

    pub fn plazas(&self) -> &GroupMap {
        &self.plazas
    }

    pub fn roads(&self) -> &GroupMap {
        &self.roads
    }

    pub fn districts(&self) -> &GroupMap {
        &self.districts
    }

    /// Groups of the given kind.
    pub fn groups(&self, kind: FocalPointKind) -> &GroupMap {
        match kind {
            FocalPointKind::Plazas => &self.plazas,
            FocalPointKind::Roads => &self.roads,
            FocalPointKind::Districts => &self.districts,
        }
    }

    /// Total number of groups across all kinds.
    pub fn group_count(&self) -> usize {
        self.plazas.len() + self.roads.len() + self.districts.len()
    }

    /// Total number of member coordinates for the given kind.
    pub fn parcel_count(&self, kind: FocalPointKind) -> usize {
        self.groups(kind).values().map(|g| g.parcel_coords.len()).sum()
    }

    /// Mapped categories present among the district groups, in column order.
    pub fn district_categories(&self) -> Vec<DistrictCategory> {
        DistrictCategory::AGGREGATED
            .into_iter()
            .filter(|c| self.districts.values().any(|d| d.category == Some(*c)))
            .collect()
    }
}

fn rekey(mut groups: GroupMap) -> GroupMap {
    for (key, group) in groups.iter_mut() {
        if group.group_key != *key {
            group.group_key = key.clone();
        }
    }
    groups
}

fn deserialize_keyed<'de, D>(deserializer: D) -> Result<GroupMap, D::Error>
where
    D: serde::Deserializer<'de>,
{
    GroupMap::deserialize(deserializer).map(rekey)
}
