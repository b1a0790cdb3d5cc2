// Modified: 2025-09-20

//! Per-tool severity/confidence tables (spec.md §4.1).

use sync_core::{Confidence, Severity, Tool};

use crate::input::RawSignal;

/// Classify `(severity, confidence)` for one signal. Total: an
/// unrecognized tool or an out-of-table native value falls back to a
/// conservative `(medium, medium)` rather than failing the run.
pub fn classify_severity(signal: &RawSignal) -> (Severity, Confidence) {
    match &signal.tool {
        Tool::Tsc => (Severity::High, Confidence::High),
        Tool::Jscpd => (jscpd_severity(signal), Confidence::High),
        Tool::DependencyCruiser => dependency_cruiser_severity(signal),
        Tool::Knip => knip_severity(signal),
        Tool::Semgrep => semgrep_severity(signal),
        Tool::Ruff => ruff_severity(signal),
        Tool::Mypy => (mypy_severity(signal), Confidence::High),
        Tool::Bandit => bandit_severity(signal),
        Tool::Pmd => pmd_severity(signal),
        Tool::Spotbugs => spotbugs_severity(signal),
        Tool::Trunk | Tool::Eslint | Tool::Other(_) => (Severity::Medium, Confidence::Medium),
    }
}

fn jscpd_severity(signal: &RawSignal) -> Severity {
    let lines = signal.jscpd_duplicated_lines.unwrap_or(0);
    let tokens = signal.jscpd_duplicated_tokens.unwrap_or(0);
    if lines >= 50 || tokens >= 500 {
        Severity::High
    } else if lines >= 20 || tokens >= 200 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn dependency_cruiser_severity(signal: &RawSignal) -> (Severity, Confidence) {
    match signal.rule_id.as_str() {
        "cycle" | "not-allowed" | "forbidden" => (Severity::High, Confidence::High),
        "orphan" | "reachable" => (Severity::Medium, Confidence::Medium),
        _ => (Severity::Medium, Confidence::Medium),
    }
}

fn knip_severity(signal: &RawSignal) -> (Severity, Confidence) {
    match signal.rule_id.as_str() {
        "dependencies" | "devDependencies" => (Severity::High, Confidence::High),
        "exports" => (Severity::Medium, Confidence::Medium),
        "files" => (Severity::Medium, Confidence::High),
        _ => (Severity::Medium, Confidence::Medium),
    }
}

fn semgrep_severity(signal: &RawSignal) -> (Severity, Confidence) {
    let severity = signal
        .native_severity
        .as_deref()
        .and_then(parse_native_severity)
        .unwrap_or(Severity::Medium);
    let confidence = signal
        .native_confidence
        .as_deref()
        .and_then(parse_native_confidence)
        .unwrap_or(Confidence::Medium);
    (severity, confidence)
}

fn ruff_severity(signal: &RawSignal) -> (Severity, Confidence) {
    let rule = signal.rule_id.as_str();
    if rule.starts_with("E9") {
        (Severity::Critical, Confidence::High)
    } else if rule.starts_with("F4") || rule.starts_with("F8") {
        (Severity::High, Confidence::High)
    } else if rule.starts_with('S') {
        (Severity::High, Confidence::Medium)
    } else if rule.starts_with('E') || rule.starts_with('F') {
        (Severity::High, Confidence::High)
    } else if rule.starts_with('W') {
        (Severity::Medium, Confidence::High)
    } else if rule.starts_with('N') || rule.starts_with('D') {
        (Severity::Low, Confidence::Low)
    } else if rule.starts_with('C') {
        (Severity::Low, Confidence::High)
    } else if rule.starts_with('B') {
        (Severity::Medium, Confidence::High)
    } else {
        (Severity::Medium, Confidence::Medium)
    }
}

fn mypy_severity(signal: &RawSignal) -> Severity {
    let rule = signal.rule_id.to_lowercase();
    if rule.contains("note") {
        Severity::Low
    } else if rule.contains("import") {
        Severity::Medium
    } else {
        Severity::High
    }
}

fn bandit_severity(signal: &RawSignal) -> (Severity, Confidence) {
    let severity = match signal.native_severity.as_deref() {
        Some("HIGH") => Severity::Critical,
        Some("MEDIUM") => Severity::High,
        Some("LOW") => Severity::Medium,
        _ => Severity::Medium,
    };
    let confidence = match signal.native_confidence.as_deref() {
        Some("HIGH") => Confidence::High,
        Some("MEDIUM") => Confidence::Medium,
        Some("LOW") => Confidence::Low,
        _ => Confidence::Medium,
    };
    (severity, confidence)
}

fn pmd_severity(signal: &RawSignal) -> (Severity, Confidence) {
    let severity = match signal.pmd_priority.unwrap_or(3) {
        1 => Severity::Critical,
        2 => Severity::High,
        3 => Severity::Medium,
        _ => Severity::Low,
    };
    let confidence = match signal.pmd_ruleset.as_deref().map(str::to_lowercase).as_deref() {
        Some("errorprone") => Confidence::High,
        Some("security") | Some("bestpractices") => Confidence::Medium,
        Some("design") | Some("codestyle") => Confidence::Low,
        _ => Confidence::Medium,
    };
    (severity, confidence)
}

fn spotbugs_severity(signal: &RawSignal) -> (Severity, Confidence) {
    let rank = signal.spotbugs_rank.unwrap_or(20);
    let severity = match signal.spotbugs_category.as_deref() {
        Some("SECURITY") => {
            if rank <= 4 {
                Severity::Critical
            } else {
                Severity::High
            }
        }
        Some("CORRECTNESS") => {
            if rank <= 4 {
                Severity::Critical
            } else if rank <= 9 {
                Severity::High
            } else {
                Severity::Medium
            }
        }
        _ => {
            if rank <= 4 {
                Severity::Critical
            } else if rank <= 9 {
                Severity::High
            } else if rank <= 14 {
                Severity::Medium
            } else {
                Severity::Low
            }
        }
    };
    let confidence = match signal.spotbugs_confidence.unwrap_or(2) {
        1 => Confidence::High,
        2 => Confidence::Medium,
        _ => Confidence::Low,
    };
    (severity, confidence)
}

fn parse_native_severity(raw: &str) -> Option<Severity> {
    match raw.to_lowercase().as_str() {
        "critical" => Some(Severity::Critical),
        "high" | "error" => Some(Severity::High),
        "medium" | "warning" => Some(Severity::Medium),
        "low" | "info" | "note" => Some(Severity::Low),
        _ => None,
    }
}

fn parse_native_confidence(raw: &str) -> Option<Confidence> {
    match raw.to_lowercase().as_str() {
        "high" => Some(Confidence::High),
        "medium" => Some(Confidence::Medium),
        "low" => Some(Confidence::Low),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sync_core::Tool;

    fn signal(tool: Tool, rule_id: &str) -> RawSignal {
        RawSignal::new(tool, rule_id, 1)
    }

    #[test]
    fn tsc_is_always_high_high() {
        assert_eq!(classify_severity(&signal(Tool::Tsc, "2322")), (Severity::High, Confidence::High));
    }

    #[test]
    fn jscpd_thresholds_bucket_by_lines_or_tokens() {
        let mut sig = signal(Tool::Jscpd, "duplication");
        sig.jscpd_duplicated_lines = Some(60);
        assert_eq!(classify_severity(&sig).0, Severity::High);

        sig.jscpd_duplicated_lines = Some(25);
        assert_eq!(classify_severity(&sig).0, Severity::Medium);

        sig.jscpd_duplicated_lines = Some(5);
        assert_eq!(classify_severity(&sig).0, Severity::Low);
    }

    #[test]
    fn ruff_e9_is_critical() {
        assert_eq!(classify_severity(&signal(Tool::Ruff, "E902")).0, Severity::Critical);
    }

    #[test]
    fn ruff_security_prefix_is_high_medium() {
        assert_eq!(classify_severity(&signal(Tool::Ruff, "S101")), (Severity::High, Confidence::Medium));
    }

    #[test]
    fn bandit_maps_native_severity_up_one_band() {
        let mut sig = signal(Tool::Bandit, "B105");
        sig.native_severity = Some("HIGH".to_string());
        sig.native_confidence = Some("MEDIUM".to_string());
        assert_eq!(classify_severity(&sig), (Severity::Critical, Confidence::Medium));
    }

    #[test]
    fn spotbugs_security_category_ignores_rank_band_boundaries() {
        let mut sig = signal(Tool::Spotbugs, "SQL_INJECTION");
        sig.spotbugs_category = Some("SECURITY".to_string());
        sig.spotbugs_rank = Some(10);
        assert_eq!(classify_severity(&sig).0, Severity::High);
    }

    #[test]
    fn pmd_priority_one_is_critical() {
        let mut sig = signal(Tool::Pmd, "UnusedLocalVariable");
        sig.pmd_priority = Some(1);
        assert_eq!(classify_severity(&sig).0, Severity::Critical);
    }
}
