// Modified: 2025-09-20

//! # sync-render
//!
//! Deterministic Markdown rendering for tracker issues (spec.md §4.6,
//! §4.7). Every function exposed here is pure: the same finding, repo,
//! run number, and timestamp always render to the same bytes, which is
//! what lets `sync-reconciler` skip no-op updates.

pub mod body;
pub mod labels;
pub mod title;
pub mod urls;

pub use body::render_body;
pub use labels::build_labels;
pub use title::render_title;
pub use urls::{rule_url, rule_urls};

use sync_core::{Finding, RepoRef};

/// A fully rendered issue, ready to hand to a `Tracker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Render a finding into the title, body, and label set for its tracker
/// issue (spec.md §4.6). `base_label` is `IssueConfig.label`.
pub fn render(finding: &Finding, repo: &RepoRef, run_number: i64, timestamp: &str, base_label: &str) -> RenderedIssue {
    RenderedIssue {
        title: render_title(finding, base_label),
        body: render_body(finding, repo, run_number, timestamp),
        labels: build_labels(finding, base_label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sync_core::{AutofixLevel, Confidence, Effort, Fingerprint, Layer, Location, Severity, Tool};

    #[test]
    fn render_is_deterministic_across_all_three_outputs() {
        let finding = Finding {
            tool: Tool::Eslint,
            rule_id: "no-unused-vars".to_string(),
            title: "'x' is unused".to_string(),
            message: "'x' is defined but never used".to_string(),
            severity: Severity::Medium,
            confidence: Confidence::High,
            effort: Effort::S,
            layer: Layer::Code,
            autofix: AutofixLevel::None,
            locations: vec![Location::new("src/a.ts", 10)],
            evidence: None,
            suggested_fix: None,
            fingerprint: Fingerprint::from_digest_hex("aa"),
        };
        let repo = RepoRef {
            owner: "acme".to_string(),
            name: "widgets".to_string(),
            commit: "0123456789abcdef".to_string(),
        };

        let a = render(&finding, &repo, 1, "ts", "vibeCheck");
        let b = render(&finding, &repo, 1, "ts", "vibeCheck");
        assert_eq!(a, b);
        assert!(a.title.starts_with("[vibeCheck]"));
        assert!(a.labels.contains(&"vibeCheck".to_string()));
    }
}
