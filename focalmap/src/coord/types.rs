//! Coordinate types for the parcel grid.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single cell on the parcel grid.
///
/// Coordinates are signed: the map is centred on `(0, 0)` with parcels
/// extending in every direction. Ordering is by `x`, then `y`, which keeps
/// serialized groups stable across runs.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct ParcelCoord {
    /// Column on the grid.
    pub x: i32,
    /// Row on the grid.
    pub y: i32,
}

impl ParcelCoord {
    /// Create a coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for ParcelCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<ParcelCoord> for (i32, i32) {
    fn from(coord: ParcelCoord) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for ParcelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Errors that can occur when parsing coordinate strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    /// The string did not contain exactly two comma-separated parts.
    #[error("expected \"x,y\", got {0:?}")]
    WrongArity(String),

    /// One of the parts was not a valid integer.
    #[error("invalid coordinate component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },
}
