// Modified: 2025-09-20

//! Small string/time utilities shared by every `sync-*` crate.
//!
//! Grounded on `fedramp_core::utils` (`current_timestamp`,
//! `format_timestamp`, `to_kebab_case`), trimmed to exactly what the
//! fingerprinter, reconciler, and renderer need in common.

use chrono::{DateTime, Utc};

/// Current UTC timestamp.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp as ISO-8601 UTC, as embedded in the run-metadata
/// marker (spec.md §6) and the rendered metadata block (spec.md §4.6).
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339()
}

/// Collapse any run of whitespace to a single space and trim the ends.
/// Shared by `sync-fingerprint`'s message normalization (spec.md §4.2)
/// and the reconciler's title normalization (spec.md §4.5 duplicate
/// collapse) so the two don't drift apart on what "collapsed" means.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
