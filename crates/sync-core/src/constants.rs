// Modified: 2025-09-20

//! Constants shared across crates that must never drift apart.
//!
//! `sync-render` produces these substrings when it renders a merged
//! finding's title; `sync-reconciler` matches on the same substrings to
//! detect a supersession candidate (spec.md §9, open question 2). Both
//! sides import from here so a rename in one cannot silently break the
//! other.

/// Phrase `sync-render` uses when a merged finding spans multiple files.
pub const MERGED_ACROSS_FILES_MARKER: &str = "issues across";

/// Phrase `sync-render` uses when a merged finding aggregates repeated
/// occurrences of the same rule.
pub const MERGED_OCCURRENCES_MARKER: &str = "occurrences)";

/// Trunk's composite sublinters (spec.md §4.5 `bySublinter` fallback).
pub const TRUNK_SUBLINTERS: &[&str] = &["yamllint", "markdownlint", "checkov", "osv-scanner", "prettier"];

/// HTML comment anchor token for the fingerprint marker (spec.md §6).
pub const FINGERPRINT_MARKER_ANCHOR: &str = "vibecheck:fingerprint";

/// HTML comment anchor token for the run-metadata marker (spec.md §6).
pub const RUN_METADATA_MARKER_ANCHOR: &str = "vibecheck:run";

/// Base label every synchronizer-managed issue carries, unless overridden
/// by `IssueConfig.label`.
pub const DEFAULT_LABEL: &str = "vibeCheck";

/// Label applied when any location of a finding is under a test-fixture
/// path (spec.md §4.3, §4.6).
pub const DEMO_LABEL: &str = "demo";

/// Branch-name prefix suggested in the metadata block (spec.md §4.6).
pub const BRANCH_PREFIX: &str = "vibecheck";

/// Host the location and commit hyperlinks are rendered against
/// (spec.md §4.6). The tracker adapter is GitHub-shaped (§6), so the
/// renderer targets `github.com` blob/commit URLs directly.
pub const REPO_HOST: &str = "github.com";
