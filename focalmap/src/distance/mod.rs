//! Distance engine.
//!
//! Computes, per asset, the minimum distance to every focal point group of a
//! kind plus the kind's aggregates, under a selectable metric.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────── DistanceContext ────────────────────────┐
//! │                                                                 │
//! │  FocalPointCollection ──► compute_distances ──► DistanceMap     │
//! │                               ▲                     │           │
//! │                               │ miss                ▼           │
//! │  distances_for_asset ──► DistanceCache ◄──── insert (Rc)        │
//! │                                                                 │
//! │  row_for_asset = plazas ++ roads ++ districts ──► DistanceRow   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The context is single-threaded (it hands out `Rc`s). Run one context per
//! worker if the caller parallelizes.

mod context;
mod engine;
mod map;
mod metric;
mod row;

pub use context::{DistanceCache, DistanceContext};
pub use engine::{
    category_column, compute_distances, group_column, is_peripheral_plaza, nearest_in_group,
    MIN_PERIPHERAL_PLAZA, NON_PERIPHERAL_MARKERS, ROAD,
};
pub use map::DistanceMap;
pub use metric::{
    distance_to, euclidean, manhattan, round_decimals, DistanceMetric, EUCLIDEAN_DECIMALS,
};
pub use row::{column_collisions, distance_columns, DistanceColumn, DistanceRow};
