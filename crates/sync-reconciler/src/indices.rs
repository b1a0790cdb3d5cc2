// Modified: 2025-09-20

//! The three lookup indices the reconciler probes in order (spec.md
//! §4.5, §9 "fallback matching as a layered index"): primary by
//! fingerprint, then by `(tool, ruleId)`, then by trunk sublinter. Each
//! is built in one linear pass over the existing issues.

use std::collections::HashMap;

use sync_core::{ExistingIssue, Fingerprint, TRUNK_SUBLINTERS};

pub struct Indices {
    pub by_fingerprint: HashMap<Fingerprint, ExistingIssue>,
    by_tool_rule: HashMap<(String, String), ExistingIssue>,
    by_sublinter: HashMap<String, ExistingIssue>,
}

impl Indices {
    pub fn build(existing: &[ExistingIssue]) -> Self {
        let mut by_fingerprint = HashMap::new();
        let mut by_tool_rule = HashMap::new();
        let mut by_sublinter = HashMap::new();

        for issue in existing {
            if let Some(metadata) = &issue.metadata {
                by_fingerprint.insert(metadata.fingerprint.clone(), issue.clone());
            }
            if let Some((tool, rule)) = parse_tool_rule_title(&issue.title) {
                by_tool_rule.insert((tool, rule), issue.clone());
            }
            if let Some(sublinter) = parse_sublinter_title(&issue.title) {
                by_sublinter.insert(sublinter, issue.clone());
            }
        }

        Self {
            by_fingerprint,
            by_tool_rule,
            by_sublinter,
        }
    }

    pub fn lookup_tool_rule(&self, tool: &str, rule_id: &str) -> Option<&ExistingIssue> {
        self.by_tool_rule.get(&(tool.to_lowercase(), rule_id.to_lowercase()))
    }

    pub fn lookup_sublinter(&self, token: &str) -> Option<&ExistingIssue> {
        self.by_sublinter.get(&token.to_lowercase())
    }
}

/// Parses `"[label] tool: ruleId …"` titles produced by the renderer's
/// title format for a single-tool, single-rule finding. Anything not
/// matching this exact shape is simply not indexed here — it falls
/// through to another lookup tier.
pub(crate) fn parse_tool_rule_title(title: &str) -> Option<(String, String)> {
    let after_label = title.split_once(']')?.1.trim_start();
    let mut words = after_label.split_whitespace();
    let tool = words.next()?.strip_suffix(':')?;
    let rule = words.next()?;
    if tool.is_empty() || rule.is_empty() {
        return None;
    }
    Some((tool.to_lowercase(), rule.to_lowercase()))
}

/// Extracts the first `\w+` token after the label prefix, for trunk's
/// composite sublinters (spec.md §4.5 fallback 2).
fn parse_sublinter_title(title: &str) -> Option<String> {
    let after_label = title.split_once(']')?.1.trim_start();
    let token: String = after_label.chars().take_while(|c| c.is_alphanumeric() || *c == '-' || *c == '_').collect();
    if token.is_empty() {
        return None;
    }
    let token = token.to_lowercase();
    TRUNK_SUBLINTERS.contains(&token.as_str()).then_some(token)
}
