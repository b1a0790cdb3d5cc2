// Modified: 2025-09-20

//! The fingerprint digest function (spec.md §4.2).

use sha2::{Digest, Sha256};
use sync_core::Fingerprint;

use crate::normalize::{line_bucket, normalize_message};

/// Compute a finding's fingerprint from its semantic identity:
/// `(tool, ruleId, canonical-path, line-bucket, normalized-message)`.
/// Pure and total; the same identity always yields the same digest.
pub fn compute(tool: &str, rule_id: &str, canonical_path: &str, start_line: u32, message: &str) -> Fingerprint {
    let bucket = line_bucket(start_line);
    let normalized = normalize_message(message);

    let mut hasher = Sha256::new();
    hasher.update(tool.as_bytes());
    hasher.update(b"\0");
    hasher.update(rule_id.as_bytes());
    hasher.update(b"\0");
    hasher.update(canonical_path.as_bytes());
    hasher.update(b"\0");
    hasher.update(bucket.to_string().as_bytes());
    hasher.update(b"\0");
    hasher.update(normalized.as_bytes());

    let digest = hasher.finalize();
    Fingerprint::from_digest_hex(hex_encode(&digest))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_under_drift_within_bucket() {
        let a = compute("eslint", "no-unused-vars", "src/a.ts", 42, "'x' is defined but never used");
        let b = compute("eslint", "no-unused-vars", "src/a.ts", 48, "'x' is defined but never used");
        assert_eq!(a, b);
    }

    #[test]
    fn changes_when_bucket_crosses() {
        let a = compute("eslint", "no-unused-vars", "src/a.ts", 42, "message");
        let b = compute("eslint", "no-unused-vars", "src/a.ts", 61, "message");
        assert_ne!(a, b);
    }

    #[test]
    fn sensitive_to_tool_rule_and_path() {
        let base = compute("eslint", "no-unused-vars", "src/a.ts", 1, "m");
        assert_ne!(base, compute("ruff", "no-unused-vars", "src/a.ts", 1, "m"));
        assert_ne!(base, compute("eslint", "no-undef", "src/a.ts", 1, "m"));
        assert_ne!(base, compute("eslint", "no-unused-vars", "src/b.ts", 1, "m"));
    }

    #[test]
    fn insensitive_to_variable_names_and_numerals_in_message() {
        let a = compute("eslint", "no-unused-vars", "src/a.ts", 1, "'count' is unused");
        let b = compute("eslint", "no-unused-vars", "src/a.ts", 1, "'total' is unused");
        assert_eq!(a, b);
    }
}
