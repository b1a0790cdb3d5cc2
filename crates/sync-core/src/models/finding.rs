// Modified: 2025-09-20

//! The finding model (spec.md §3).
//!
//! `Finding` is a plain, immutable-after-construction record — no
//! subclassing, per spec.md §9. It is grounded on
//! `fedramp_core::models::poam::PoamFinding`, which is the teacher's
//! closest analog (a status/severity/remediation/evidence record), but
//! re-typed to the exact field list spec.md §3 names.

use serde::{Deserialize, Serialize};

use super::enums::{AutofixLevel, Confidence, Effort, Layer, Severity, Tool};
use super::fingerprint::Fingerprint;

/// A single source location a finding was reported at (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub start_line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,
}

impl Location {
    pub fn new(path: impl Into<String>, start_line: u32) -> Self {
        Self {
            path: path.into(),
            start_line,
            end_line: None,
        }
    }
}

/// Optional supporting evidence for a finding (spec.md §3).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
}

/// Optional structured remediation guidance (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedFix {
    pub goal: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub acceptance: Vec<String>,
}

/// A finding exactly as deserialized from the wire format of spec.md §6,
/// before fingerprinting. `fingerprint` is `Option` here because callers
/// are not required to supply one — `sync-fingerprint::finalize` computes
/// it and, if one was supplied, checks the two agree (SPEC_FULL.md §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFinding {
    pub tool: Tool,
    pub rule_id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub confidence: Confidence,
    pub effort: Effort,
    pub layer: Layer,
    pub autofix: AutofixLevel,
    pub locations: Vec<Location>,
    #[serde(default)]
    pub evidence: Option<Evidence>,
    #[serde(default)]
    pub suggested_fix: Option<SuggestedFix>,
    #[serde(default)]
    pub fingerprint: Option<String>,
}

/// A finding, immutable after construction (spec.md §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub tool: Tool,
    pub rule_id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub confidence: Confidence,
    pub effort: Effort,
    pub layer: Layer,
    pub autofix: AutofixLevel,
    pub locations: Vec<Location>,
    pub evidence: Option<Evidence>,
    pub suggested_fix: Option<SuggestedFix>,
    pub fingerprint: Fingerprint,
}

impl Finding {
    /// The canonical (first) location, per spec.md §3.
    pub fn canonical_location(&self) -> &Location {
        self.locations.first().expect("Finding.locations is non-empty by construction")
    }

    /// Unique file paths across all locations, in first-seen order.
    pub fn unique_paths(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut paths = Vec::new();
        for loc in &self.locations {
            if seen.insert(loc.path.as_str()) {
                paths.push(loc.path.as_str());
            }
        }
        paths
    }

    /// Whether any location of this finding sits under a test-fixture
    /// path, per spec.md §4.3/§4.6. A path is a fixture path if any
    /// component matches a conventional fixture directory name.
    pub fn is_demo(&self) -> bool {
        const FIXTURE_DIR_NAMES: &[&str] = &["__fixtures__", "fixtures", "test-fixtures", "testdata", "__snapshots__"];
        self.locations.iter().any(|loc| loc.path.split('/').any(|component| FIXTURE_DIR_NAMES.contains(&component)))
    }
}
