// Modified: 2025-09-20

//! Raw, tool-native signal a scorer consumes (spec.md §4.1).
//!
//! This is deliberately *not* `Finding` — parsing each tool's native
//! output into this shape is out of scope (spec.md §1); this crate picks
//! up at the point a caller has already extracted the handful of fields
//! each per-tool rule needs.

use serde::{Deserialize, Serialize};
use sync_core::Tool;

/// Tool-native fields needed to classify one finding. Fields irrelevant
/// to a given tool are simply left `None`/default; every classifier only
/// reads the fields its own tool's rule table names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSignal {
    pub tool: Tool,
    pub rule_id: String,
    pub location_count: usize,
    #[serde(default)]
    pub has_autofix: bool,

    /// Pass-through severity as reported by the tool itself (semgrep,
    /// bandit's `HIGH`/`MEDIUM`/`LOW`).
    #[serde(default)]
    pub native_severity: Option<String>,
    /// Pass-through confidence (semgrep, bandit, spotbugs's `1`/`2`/`3`
    /// stringified).
    #[serde(default)]
    pub native_confidence: Option<String>,

    #[serde(default)]
    pub jscpd_duplicated_lines: Option<u32>,
    #[serde(default)]
    pub jscpd_duplicated_tokens: Option<u32>,

    #[serde(default)]
    pub pmd_priority: Option<u32>,
    #[serde(default)]
    pub pmd_ruleset: Option<String>,

    #[serde(default)]
    pub spotbugs_category: Option<String>,
    #[serde(default)]
    pub spotbugs_rank: Option<u32>,
    #[serde(default)]
    pub spotbugs_confidence: Option<u32>,
}

impl RawSignal {
    pub fn new(tool: Tool, rule_id: impl Into<String>, location_count: usize) -> Self {
        Self {
            tool,
            rule_id: rule_id.into(),
            location_count,
            has_autofix: false,
            native_severity: None,
            native_confidence: None,
            jscpd_duplicated_lines: None,
            jscpd_duplicated_tokens: None,
            pmd_priority: None,
            pmd_ruleset: None,
            spotbugs_category: None,
            spotbugs_rank: None,
            spotbugs_confidence: None,
        }
    }
}
