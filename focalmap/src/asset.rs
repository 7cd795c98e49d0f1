//! Transactable assets on the parcel grid.

use serde::{Deserialize, Serialize};

use crate::coord::ParcelCoord;

/// Kind of asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// A single parcel.
    Land,
    /// A group of adjacent parcels.
    Estate,
    District,
}

/// An asset referenced by transactions.
///
/// The distance engine only reads `id` and the coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(alias = "_id")]
    pub id: String,
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
}

impl Asset {
    pub fn new(id: impl Into<String>, x: i32, y: i32, asset_type: AssetType) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            asset_type,
        }
    }

    /// A single-parcel asset.
    pub fn land(id: impl Into<String>, x: i32, y: i32) -> Self {
        Self::new(id, x, y, AssetType::Land)
    }

    #[inline]
    pub fn coord(&self) -> ParcelCoord {
        ParcelCoord::new(self.x, self.y)
    }
}
