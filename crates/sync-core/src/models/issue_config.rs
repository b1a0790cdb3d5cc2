// Modified: 2025-09-20

//! `IssueConfig` — enumerated synchronizer options (spec.md §3).

use serde::{Deserialize, Serialize};

use super::enums::{Confidence, SeverityThreshold};
use crate::constants::DEFAULT_LABEL;

/// Enumerated options controlling the reconciler's behavior for a run
/// (spec.md §3). Every field here is a reconciliation/rendering policy
/// knob; the ambient tracker credentials that make the process runnable
/// live alongside this in `crate::config::AppConfig` instead, since they
/// are a config-loading concern rather than reconciler semantics
/// (SPEC_FULL.md §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueConfig {
    /// Master switch.
    pub enabled: bool,
    /// Primary tag every issue carries.
    pub label: String,
    /// Cap on new creations per run.
    pub max_new_per_run: u32,
    pub severity_threshold: SeverityThreshold,
    pub confidence_threshold: Confidence,
    /// Enables flap-protected closure, supersession, and duplicate
    /// collapse.
    pub close_resolved: bool,
    pub assignees: Vec<String>,
}

impl Default for IssueConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            label: DEFAULT_LABEL.to_string(),
            max_new_per_run: 25,
            severity_threshold: SeverityThreshold::Info,
            confidence_threshold: Confidence::Low,
            close_resolved: false,
            assignees: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let config = IssueConfig::default();
        assert!(config.enabled);
        assert_eq!(config.label, "vibeCheck");
        assert_eq!(config.max_new_per_run, 25);
        assert_eq!(config.severity_threshold, SeverityThreshold::Info);
        assert!(!config.close_resolved);
    }
}
