//! Distance metrics on the parcel grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::ParcelCoord;

/// Number of fractional digits kept by [`euclidean`].
pub const EUCLIDEAN_DECIMALS: i32 = 7;

/// Distance function applied between two grid cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Grid-step distance: `|dx| + |dy|`.
    #[default]
    Manhattan,
    /// Straight-line distance, rounded to [`EUCLIDEAN_DECIMALS`] digits.
    Euclidean,
}

impl DistanceMetric {
    /// Resolve a metric selector, defaulting to manhattan.
    ///
    /// Matching is case-insensitive. An absent selector silently defaults; an
    /// unrecognized one defaults with a warning.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            None => DistanceMetric::default(),
            Some(s) => s.parse().unwrap_or_else(|_| {
                tracing::warn!(selector = %s, "Unrecognized distance metric, using manhattan");
                DistanceMetric::default()
            }),
        }
    }

    /// Lowercase name of the metric.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Manhattan => "manhattan",
            DistanceMetric::Euclidean => "euclidean",
        }
    }

    /// Distance between two points under this metric.
    #[inline]
    pub fn between(&self, x: i32, y: i32, x2: i32, y2: i32) -> f64 {
        match self {
            DistanceMetric::Manhattan => manhattan(x, y, x2, y2),
            DistanceMetric::Euclidean => euclidean(x, y, x2, y2),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manhattan" => Ok(DistanceMetric::Manhattan),
            "euclidean" => Ok(DistanceMetric::Euclidean),
            _ => Err(format!(
                "unknown distance metric '{}' (expected manhattan or euclidean)",
                s
            )),
        }
    }
}

/// `|x − x2| + |y − y2|`, exact.
#[inline]
pub fn manhattan(x: i32, y: i32, x2: i32, y2: i32) -> f64 {
    let dx = (i64::from(x) - i64::from(x2)).abs();
    let dy = (i64::from(y) - i64::from(y2)).abs();
    (dx + dy) as f64
}

/// `sqrt((x − x2)² + (y − y2)²)` rounded half away from zero to 7 decimals.
///
/// Rounding is never truncation: `euclidean(0, 0, 1, 1)` is `1.4142136`.
#[inline]
pub fn euclidean(x: i32, y: i32, x2: i32, y2: i32) -> f64 {
    let dx = i128::from(x) - i128::from(x2);
    let dy = i128::from(y) - i128::from(y2);
    round_decimals(((dx * dx + dy * dy) as f64).sqrt(), EUCLIDEAN_DECIMALS)
}

/// Round to `decimals` fractional digits, halves away from zero.
#[inline]
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Distance from `(x, y)` to a single grid cell.
#[inline]
pub fn distance_to(x: i32, y: i32, point: ParcelCoord, metric: DistanceMetric) -> f64 {
    metric.between(x, y, point.x, point.y)
}
