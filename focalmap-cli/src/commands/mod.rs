//! CLI command implementations.

pub mod build;
pub mod columns;
pub mod common;
pub mod config;
pub mod distances;
pub mod init;
pub mod inspect;
