// Modified: 2025-09-20

//! Autofix-level classification (spec.md §4.1).

use sync_core::{AutofixLevel, Tool};

use crate::input::RawSignal;

const ESLINT_SAFE_RULES: &[&str] = &[
    "semi",
    "quotes",
    "indent",
    "comma-dangle",
    "no-extra-semi",
    "no-trailing-spaces",
    "eol-last",
    "space-before-function-paren",
    "object-curly-spacing",
    "array-bracket-spacing",
    "prefer-const",
    "no-var",
];

const RUFF_SAFE_PREFIXES: &[&str] = &["I", "W", "E1", "E2", "E3", "E7", "Q", "COM", "UP"];

pub fn classify_autofix(signal: &RawSignal) -> AutofixLevel {
    if !signal.has_autofix {
        return AutofixLevel::None;
    }

    match signal.tool {
        Tool::Other(ref name) if name == "prettier" => AutofixLevel::Safe,
        Tool::Eslint => {
            if ESLINT_SAFE_RULES.contains(&signal.rule_id.as_str()) {
                AutofixLevel::Safe
            } else {
                AutofixLevel::RequiresReview
            }
        }
        Tool::Trunk => AutofixLevel::RequiresReview,
        Tool::Ruff => {
            if RUFF_SAFE_PREFIXES.iter().any(|p| signal.rule_id.starts_with(p)) {
                AutofixLevel::Safe
            } else {
                AutofixLevel::RequiresReview
            }
        }
        _ => AutofixLevel::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(tool: Tool, rule_id: &str, has_autofix: bool) -> RawSignal {
        let mut sig = RawSignal::new(tool, rule_id, 1);
        sig.has_autofix = has_autofix;
        sig
    }

    #[test]
    fn no_autofix_hint_is_none() {
        assert_eq!(classify_autofix(&signal(Tool::Eslint, "semi", false)), AutofixLevel::None);
    }

    #[test]
    fn eslint_style_rule_is_safe() {
        assert_eq!(classify_autofix(&signal(Tool::Eslint, "semi", true)), AutofixLevel::Safe);
    }

    #[test]
    fn eslint_non_style_rule_requires_review() {
        assert_eq!(classify_autofix(&signal(Tool::Eslint, "no-unused-vars", true)), AutofixLevel::RequiresReview);
    }

    #[test]
    fn trunk_with_fix_requires_review() {
        assert_eq!(classify_autofix(&signal(Tool::Trunk, "yamllint:indentation", true)), AutofixLevel::RequiresReview);
    }

    #[test]
    fn ruff_safe_prefix_is_safe() {
        assert_eq!(classify_autofix(&signal(Tool::Ruff, "I001", true)), AutofixLevel::Safe);
    }

    #[test]
    fn ruff_unsafe_prefix_requires_review() {
        assert_eq!(classify_autofix(&signal(Tool::Ruff, "S105", true)), AutofixLevel::RequiresReview);
    }

    #[test]
    fn unnamed_tool_with_autofix_hint_is_none() {
        assert_eq!(classify_autofix(&signal(Tool::Semgrep, "some-rule", true)), AutofixLevel::None);
        assert_eq!(classify_autofix(&signal(Tool::Bandit, "B608", true)), AutofixLevel::None);
    }
}
