//! focalmap - focal point grouping and distance enrichment for parcel maps.
//!
//! Groups the tiles of a parcel map into focal points (plazas, roads and
//! themed districts), persists them, and computes per-asset distances to
//! every focal point and to per-kind aggregates.
//!
//! # Pipeline
//!
//! ```text
//! tiles.json ─┐
//! districts ──┼─► focal::build_focal_points ─► store::FocalPointStore
//! plazas ─────┘                                       │
//!                                                     ▼
//! assets ─────────────────► distance::DistanceContext ─► report (CSV)
//! ```

pub mod asset;
pub mod config;
pub mod coord;
pub mod distance;
pub mod focal;
pub mod logging;
pub mod report;
pub mod source;
pub mod store;
pub mod tile;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
