//! Focal point groups.
//!
//! A focal point is a named region of the map (a plaza, a road segment or a
//! district) that asset distances are measured against. This module holds the
//! group types, the deterministic district naming scheme, and the builder that
//! turns raw map data into a [`FocalPointCollection`].
//!
//! # Architecture
//!
//! ```text
//! tiles ──────────► classify_tiles ──┐
//! district defs ─────────────────────┼──► build_focal_points ──► FocalPointCollection
//! plaza names ───────────────────────┘                             ├── plazas
//!                                                                  ├── roads
//!                                                                  └── districts
//! ```

mod builder;
mod naming;
mod types;

pub use builder::{build_focal_points, build_from_classified, BuildError, BuildSummary};
pub use naming::district_name_to_id;
pub use types::{
    DistrictCategory, FocalPointCollection, FocalPointGroup, FocalPointKind, GroupMap,
    RESERVED_CATEGORIES,
};
