// Modified: 2025-09-20

//! Turn a wire-format `RawFinding` into a fingerprinted `Finding`
//! (SPEC_FULL.md §3).

use sync_core::{Error, Finding, Fingerprint, RawFinding, Result};

use crate::digest::compute;

/// Compute `raw`'s fingerprint and attach it, producing a `Finding`. If
/// `raw.fingerprint` was supplied (a prior run round-tripping its own
/// output), it must agree with what we compute here; disagreement is
/// treated as malformed input per spec.md §7, since a finding carrying a
/// mismatched fingerprint would otherwise corrupt the reconciler's
/// `seenFingerprints` bookkeeping.
pub fn finalize(raw: RawFinding) -> Result<Finding> {
    let canonical = raw
        .locations
        .first()
        .ok_or_else(|| Error::input("finding has no locations"))?;

    let computed = compute(raw.tool.as_str(), &raw.rule_id, &canonical.path, canonical.start_line, &raw.message);

    if let Some(supplied) = &raw.fingerprint {
        let supplied = Fingerprint::parse(supplied).ok_or_else(|| Error::input(format!("malformed fingerprint: {supplied}")))?;
        if supplied != computed {
            return Err(Error::input(format!(
                "supplied fingerprint {} does not match computed fingerprint {}",
                supplied.full(),
                computed.full()
            )));
        }
    }

    Ok(Finding {
        tool: raw.tool,
        rule_id: raw.rule_id,
        title: raw.title,
        message: raw.message,
        severity: raw.severity,
        confidence: raw.confidence,
        effort: raw.effort,
        layer: raw.layer,
        autofix: raw.autofix,
        locations: raw.locations,
        evidence: raw.evidence,
        suggested_fix: raw.suggested_fix,
        fingerprint: computed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sync_core::{AutofixLevel, Confidence, Effort, Layer, Location, Severity, Tool};

    fn raw() -> RawFinding {
        RawFinding {
            tool: Tool::Eslint,
            rule_id: "no-unused-vars".to_string(),
            title: "'x' is unused".to_string(),
            message: "'x' is defined but never used".to_string(),
            severity: Severity::Medium,
            confidence: Confidence::High,
            effort: Effort::S,
            layer: Layer::Code,
            autofix: AutofixLevel::None,
            locations: vec![Location::new("src/a.ts", 42)],
            evidence: None,
            suggested_fix: None,
            fingerprint: None,
        }
    }

    #[test]
    fn computes_fingerprint_when_absent() {
        let finding = finalize(raw()).unwrap();
        assert!(finding.fingerprint.full().starts_with("sha256:"));
    }

    #[test]
    fn rejects_finding_with_no_locations() {
        let mut r = raw();
        r.locations.clear();
        assert!(finalize(r).is_err());
    }

    #[test]
    fn accepts_matching_supplied_fingerprint() {
        let computed = finalize(raw()).unwrap().fingerprint.full().to_string();
        let mut r = raw();
        r.fingerprint = Some(computed);
        assert!(finalize(r).is_ok());
    }

    #[test]
    fn rejects_mismatched_supplied_fingerprint() {
        let mut r = raw();
        r.fingerprint = Some("sha256:0000000000000000000000000000000000000000000000000000000000000000".to_string());
        assert!(finalize(r).is_err());
    }
}
