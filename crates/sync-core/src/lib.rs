// Modified: 2025-09-20

//! # sync-core
//!
//! Core data models, error types, and configuration for the
//! finding-to-issue synchronizer. Every other `sync-*` crate depends on
//! this one; it has no dependency on any of them.

pub mod config;
pub mod constants;
pub mod error;
pub mod markers;
pub mod models;
pub mod utils;

pub use constants::*;
pub use error::{Error, Result};
pub use models::*;

/// Crate version, re-exported for `--version` output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Flap-protection window: consecutive absent runs before an issue is
/// closed automatically (spec.md §4.5).
pub const FLAP_PROTECTION_RUNS: i64 = 3;
