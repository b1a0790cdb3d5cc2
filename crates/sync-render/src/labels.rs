// Modified: 2025-09-20

//! Label-set construction (spec.md §4.6).

use sync_core::{AutofixLevel, Finding, DEMO_LABEL};

pub fn build_labels(finding: &Finding, base_label: &str) -> Vec<String> {
    let mut labels = vec![
        base_label.to_string(),
        format!("severity:{}", finding.severity),
        format!("confidence:{}", finding.confidence),
        format!("effort:{}", finding.effort),
        format!("layer:{}", finding.layer),
        format!("tool:{}", finding.tool),
    ];

    if finding.autofix == AutofixLevel::Safe {
        labels.push("autofix:safe".to_string());
    }
    if finding.is_demo() {
        labels.push(DEMO_LABEL.to_string());
    }

    labels
}
