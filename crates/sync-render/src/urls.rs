// Modified: 2025-09-20

//! Rule documentation URL resolution (spec.md §4.7).

use sync_core::Tool;

const YAMLLINT_RULES: &[&str] = &[
    "braces",
    "brackets",
    "colons",
    "commas",
    "comments",
    "comments-indentation",
    "document-end",
    "document-start",
    "empty-lines",
    "empty-values",
    "hyphens",
    "indentation",
    "key-duplicates",
    "key-ordering",
    "line-length",
    "new-line-at-end-of-file",
    "new-lines",
    "octal-values",
    "quoted-strings",
    "trailing-spaces",
    "truthy",
];

/// Resolve `(tool, ruleId)` into a best-effort documentation URL,
/// handling merged rule ids (`"A+B"`) by resolving each piece
/// individually. Order is preserved, one entry per sub-rule.
pub fn rule_urls(tool: &Tool, rule_id: &str) -> Vec<(String, Option<String>)> {
    rule_id.split('+').map(|piece| (piece.to_string(), rule_url(tool, piece))).collect()
}

/// Resolve a single, unmerged rule id into a documentation URL.
pub fn rule_url(tool: &Tool, rule_id: &str) -> Option<String> {
    match tool {
        Tool::Trunk => trunk_url(rule_id),
        Tool::Eslint => Some(eslint_url(rule_id)),
        Tool::Semgrep => Some(format!("https://semgrep.dev/r/{rule_id}")),
        Tool::Ruff => Some(format!("https://docs.astral.sh/ruff/rules/{}", rule_id.to_lowercase())),
        Tool::Mypy => Some(format!("https://mypy.readthedocs.io/en/stable/error_code_list.html#code-{rule_id}")),
        Tool::Bandit => Some(format!("https://bandit.readthedocs.io/en/latest/plugins/index.html#{}", rule_id.to_lowercase())),
        Tool::Pmd => Some(format!("https://docs.pmd-code.org/latest/pmd_rules_java.html#{}", rule_id.to_lowercase())),
        Tool::Spotbugs => Some(format!("https://spotbugs.readthedocs.io/en/stable/bugDescriptions.html#{rule_id}")),
        Tool::Tsc | Tool::Jscpd | Tool::DependencyCruiser | Tool::Knip | Tool::Other(_) => None,
    }
}

fn eslint_url(rule_id: &str) -> String {
    if let Some(rule) = rule_id.strip_prefix("@typescript-eslint/") {
        format!("https://typescript-eslint.io/rules/{rule}")
    } else {
        format!("https://eslint.org/docs/latest/rules/{rule_id}")
    }
}

fn trunk_url(rule_id: &str) -> Option<String> {
    if rule_id.starts_with("GHSA-") {
        return Some(format!("https://github.com/advisories/{rule_id}"));
    }
    if rule_id.starts_with("CVE-") {
        return Some(format!("https://nvd.nist.gov/vuln/detail/{rule_id}"));
    }
    if let Some(number) = rule_id.strip_prefix("CWE-") {
        return Some(format!("https://cwe.mitre.org/data/definitions/{number}.html"));
    }
    if rule_id.starts_with("CKV_") {
        return Some(format!("https://docs.bridgecrew.io/docs/{}", rule_id.to_lowercase()));
    }
    if is_markdownlint_rule(rule_id) {
        return Some(format!("https://github.com/DavidAnson/markdownlint/blob/main/doc/Rules.md#{}", rule_id.to_lowercase()));
    }
    if is_shellcheck_rule(rule_id) {
        return Some(format!("https://www.shellcheck.net/wiki/{rule_id}"));
    }
    if YAMLLINT_RULES.contains(&rule_id) {
        return Some(format!("https://yamllint.readthedocs.io/en/stable/rules.html#module-yamllint.rules.{}", rule_id.replace('-', "_")));
    }
    if rule_id.starts_with("@typescript-eslint/") || is_eslint_style_rule(rule_id) {
        return Some(eslint_url(rule_id));
    }
    None
}

fn is_markdownlint_rule(rule_id: &str) -> bool {
    let upper = rule_id.to_uppercase();
    upper.starts_with("MD") && upper.len() == 6 && upper[2..].chars().all(|c| c.is_ascii_digit())
}

fn is_shellcheck_rule(rule_id: &str) -> bool {
    let upper = rule_id.to_uppercase();
    upper.starts_with("SC") && upper.len() >= 5 && upper[2..].chars().all(|c| c.is_ascii_digit())
}

fn is_eslint_style_rule(rule_id: &str) -> bool {
    !rule_id.is_empty() && rule_id.chars().all(|c| c.is_ascii_lowercase() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunk_ghsa_links_to_advisories() {
        assert_eq!(rule_url(&Tool::Trunk, "GHSA-xxxx-yyyy-zzzz"), Some("https://github.com/advisories/GHSA-xxxx-yyyy-zzzz".to_string()));
    }

    #[test]
    fn trunk_markdownlint_rule_resolves() {
        assert_eq!(
            rule_url(&Tool::Trunk, "MD013"),
            Some("https://github.com/DavidAnson/markdownlint/blob/main/doc/Rules.md#md013".to_string())
        );
    }

    #[test]
    fn trunk_yamllint_rule_resolves() {
        assert!(rule_url(&Tool::Trunk, "line-length").is_some());
    }

    #[test]
    fn trunk_unknown_shape_is_none() {
        assert_eq!(rule_url(&Tool::Trunk, "some-unrecognized-thing!"), None);
    }

    #[test]
    fn eslint_plain_rule_resolves() {
        assert_eq!(rule_url(&Tool::Eslint, "no-unused-vars"), Some("https://eslint.org/docs/latest/rules/no-unused-vars".to_string()));
    }

    #[test]
    fn eslint_typescript_rule_resolves_to_typescript_eslint_docs() {
        assert_eq!(rule_url(&Tool::Eslint, "@typescript-eslint/no-explicit-any"), Some("https://typescript-eslint.io/rules/no-explicit-any".to_string()));
    }

    #[test]
    fn merged_rule_id_splits_on_plus() {
        let urls = rule_urls(&Tool::Eslint, "semi+quotes");
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].0, "semi");
        assert_eq!(urls[1].0, "quotes");
    }

    #[test]
    fn tsc_has_no_doc_url() {
        assert_eq!(rule_url(&Tool::Tsc, "2322"), None);
    }
}
