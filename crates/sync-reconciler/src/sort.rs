// Modified: 2025-09-20

//! Deterministic finding ordering (spec.md §4.5, §8 property 12):
//! severity desc, confidence desc, path asc, line asc.

use std::cmp::Ordering;

use sync_core::Finding;

pub fn compare_findings_for_sort(a: &Finding, b: &Finding) -> Ordering {
    b.severity
        .cmp(&a.severity)
        .then_with(|| b.confidence.cmp(&a.confidence))
        .then_with(|| a.canonical_location().path.cmp(&b.canonical_location().path))
        .then_with(|| a.canonical_location().start_line.cmp(&b.canonical_location().start_line))
}

pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(compare_findings_for_sort);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sync_core::{AutofixLevel, Confidence, Effort, Fingerprint, Layer, Location, Severity, Tool};

    fn finding(severity: Severity, confidence: Confidence, path: &str, line: u32) -> Finding {
        Finding {
            tool: Tool::Eslint,
            rule_id: "r".to_string(),
            title: "t".to_string(),
            message: "m".to_string(),
            severity,
            confidence,
            effort: Effort::S,
            layer: Layer::Code,
            autofix: AutofixLevel::None,
            locations: vec![Location::new(path, line)],
            evidence: None,
            suggested_fix: None,
            fingerprint: Fingerprint::from_digest_hex("aa"),
        }
    }

    #[test]
    fn severity_dominates() {
        let mut findings = vec![
            finding(Severity::Low, Confidence::High, "a.ts", 1),
            finding(Severity::Critical, Confidence::Low, "z.ts", 9),
        ];
        sort_findings(&mut findings);
        assert_eq!(findings[0].severity, Severity::Critical);
    }

    #[test]
    fn path_then_line_break_ties() {
        let mut findings = vec![finding(Severity::High, Confidence::High, "b.ts", 1), finding(Severity::High, Confidence::High, "a.ts", 5)];
        sort_findings(&mut findings);
        assert_eq!(findings[0].canonical_location().path, "a.ts");
    }

    #[test]
    fn ordering_is_total_and_deterministic_on_repeated_sorts() {
        let mut findings = vec![
            finding(Severity::Medium, Confidence::High, "c.ts", 3),
            finding(Severity::Medium, Confidence::High, "a.ts", 9),
            finding(Severity::Medium, Confidence::Medium, "a.ts", 1),
        ];
        sort_findings(&mut findings);
        let first_pass: Vec<_> = findings.iter().map(|f| f.canonical_location().path.clone()).collect();
        sort_findings(&mut findings);
        let second_pass: Vec<_> = findings.iter().map(|f| f.canonical_location().path.clone()).collect();
        assert_eq!(first_pass, second_pass);
    }
}
