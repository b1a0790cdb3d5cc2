// Modified: 2025-09-20

//! Layer classification (spec.md §4.1).

use sync_core::{Layer, Tool};

use crate::input::RawSignal;

const SECURITY_TOKENS: &[&str] = &[
    "security", "xss", "injection", "csrf", "sql", "xxe", "ssrf", "auth", "crypto", "secret", "password", "eval",
    "dangerous", "hardcoded", "random", "prototype", "pollution", "vulnerable",
];

const SPOTBUGS_SECURITY_TOKENS: &[&str] = &["security", "sql", "xss"];

pub fn classify_layer(signal: &RawSignal) -> Layer {
    if matches!(signal.tool, Tool::Bandit) {
        return Layer::Security;
    }

    if matches!(signal.tool, Tool::Spotbugs) {
        let rule = signal.rule_id.to_lowercase();
        return if SPOTBUGS_SECURITY_TOKENS.iter().any(|t| rule.contains(t)) {
            Layer::Security
        } else {
            Layer::Code
        };
    }

    let rule = &signal.rule_id;
    if rule.starts_with("GHSA-") || rule.starts_with("CVE-") || rule.starts_with("CWE-") {
        return Layer::Security;
    }

    if matches!(signal.tool, Tool::Trunk) && (rule.contains("GHSA") || rule.contains("CVE")) {
        return Layer::Security;
    }

    let rule_lower = rule.to_lowercase();
    if SECURITY_TOKENS.iter().any(|t| rule_lower.contains(t)) {
        return Layer::Security;
    }

    if matches!(signal.tool, Tool::Ruff) && rule.starts_with('S') {
        return Layer::Security;
    }

    if matches!(signal.tool, Tool::DependencyCruiser | Tool::Knip)
        || rule_lower.contains("import")
        || rule_lower.contains("dependency")
        || rule_lower.contains("cycle")
    {
        return Layer::Architecture;
    }

    Layer::Code
}
