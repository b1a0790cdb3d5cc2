// Modified: 2025-09-20

//! The reconciler state machine (spec.md §4.5). `reconcile` is a pure
//! function: `(findings, existing, config, runNumber) -> (ops, stats)`.
//! It never touches the network; `crate::executor` drives the returned
//! `Op`s through a `Tracker`.

use std::collections::HashSet;

use sync_core::{
    constants::{MERGED_ACROSS_FILES_MARKER, MERGED_OCCURRENCES_MARKER, TRUNK_SUBLINTERS},
    ExistingIssue, Finding, Fingerprint, IssueConfig, RepoRef, Tool, FLAP_PROTECTION_RUNS,
};
use sync_render::{build_labels, render_body, render_title};
use sync_tracker::{CreateIssueInput, UpdateIssueInput};

use crate::indices::{parse_tool_rule_title, Indices};
use crate::ops::{Op, Stats};
use crate::sort::sort_findings;
use crate::title_normalize::normalize_title;

pub fn reconcile(findings: &[Finding], existing: &[ExistingIssue], config: &IssueConfig, repo: &RepoRef, run_number: i64, timestamp: &str) -> (Vec<Op>, Stats) {
    let mut stats = Stats::default();
    let mut ops = Vec::new();

    let mut admitted: Vec<Finding> = Vec::new();
    for finding in findings {
        if config.severity_threshold.admits(finding.severity) && finding.confidence.admits(config.confidence_threshold) {
            admitted.push(finding.clone());
        } else {
            stats.skipped_below_threshold += 1;
        }
    }
    sort_findings(&mut admitted);

    let mut indices = Indices::build(existing);
    let mut seen_fingerprints: HashSet<Fingerprint> = HashSet::new();
    let mut created_count: u32 = 0;

    for finding in &admitted {
        seen_fingerprints.insert(finding.fingerprint.clone());

        let matched = find_existing_match(finding, &mut indices, &mut seen_fingerprints);

        match matched {
            Some(issue) if issue.is_open() => {
                let title = render_title(finding, &config.label);
                let body = render_body(finding, repo, run_number, timestamp);
                let labels = build_labels(finding, &config.label);
                ops.push(Op::UpdateIssue(UpdateIssueInput {
                    number: issue.number,
                    title: Some(title),
                    body: Some(body),
                    labels: Some(labels),
                }));
                stats.updated += 1;
            }
            Some(_closed) => {
                // Closed-issue no-reopen (spec.md §8 property 8): nothing happens.
            }
            None => {
                if created_count >= config.max_new_per_run {
                    stats.skipped_max_reached += 1;
                } else {
                    let title = render_title(finding, &config.label);
                    let body = render_body(finding, repo, run_number, timestamp);
                    let labels = build_labels(finding, &config.label);
                    ops.push(Op::CreateIssue(CreateIssueInput {
                        title,
                        body,
                        labels,
                        assignees: config.assignees.clone(),
                    }));
                    created_count += 1;
                    stats.created += 1;
                }
            }
        }
    }

    if config.close_resolved {
        let mut closed_numbers: HashSet<i64> = HashSet::new();
        flap_protected_closure(existing, &seen_fingerprints, run_number, &mut closed_numbers, &mut ops, &mut stats);
        supersession(existing, &admitted, &seen_fingerprints, &config.label, &mut closed_numbers, &mut ops, &mut stats);
        duplicate_collapse(existing, &closed_numbers, &mut ops, &mut stats);
    }

    (ops, stats)
}

/// Probes the layered fallback index (spec.md §4.5 step 2). On a
/// fallback hit, re-binds the primary index to the matched issue and
/// re-inserts its prior fingerprint into `seenFingerprints`, per §9's
/// preserved "first wins" ambiguity.
fn find_existing_match(finding: &Finding, indices: &mut Indices, seen_fingerprints: &mut HashSet<Fingerprint>) -> Option<ExistingIssue> {
    if let Some(issue) = indices.by_fingerprint.get(&finding.fingerprint) {
        return Some(issue.clone());
    }

    let fallback = indices
        .lookup_tool_rule(finding.tool.as_str(), &finding.rule_id)
        .or_else(|| {
            if finding.tool == Tool::Trunk {
                leading_token(&finding.title).and_then(|token| indices.lookup_sublinter(&token))
            } else {
                None
            }
        })
        .cloned();

    if let Some(issue) = &fallback {
        if let Some(metadata) = &issue.metadata {
            seen_fingerprints.insert(metadata.fingerprint.clone());
        }
        indices.by_fingerprint.insert(finding.fingerprint.clone(), issue.clone());
    }

    fallback
}

fn leading_token(s: &str) -> Option<String> {
    let token: String = s.trim_start().chars().take_while(|c| c.is_alphanumeric() || *c == '-' || *c == '_').collect();
    if token.is_empty() {
        None
    } else {
        Some(token.to_lowercase())
    }
}

fn flap_protected_closure(existing: &[ExistingIssue], seen_fingerprints: &HashSet<Fingerprint>, run_number: i64, closed_numbers: &mut HashSet<i64>, ops: &mut Vec<Op>, stats: &mut Stats) {
    for issue in existing {
        if !issue.is_open() {
            continue;
        }
        let Some(metadata) = &issue.metadata else { continue };
        if seen_fingerprints.contains(&metadata.fingerprint) {
            continue;
        }

        let consecutive_misses = run_number - metadata.last_seen_run;
        if consecutive_misses >= FLAP_PROTECTION_RUNS {
            ops.push(Op::CloseIssue {
                number: issue.number,
                comment: Some("This finding was not detected in the current run and is assumed resolved.".to_string()),
            });
            closed_numbers.insert(issue.number);
            stats.closed += 1;
        } else {
            let remaining = FLAP_PROTECTION_RUNS - consecutive_misses;
            ops.push(Op::CommentIssue {
                number: issue.number,
                body: format!("This finding was not detected in run {run_number}. It will be closed automatically after {remaining} more consecutive absent run(s)."),
            });
        }
    }
}

fn supersession(existing: &[ExistingIssue], admitted: &[Finding], seen_fingerprints: &HashSet<Fingerprint>, label: &str, closed_numbers: &mut HashSet<i64>, ops: &mut Vec<Op>, stats: &mut Stats) {
    for issue in existing {
        if !issue.is_open() || closed_numbers.contains(&issue.number) {
            continue;
        }
        if let Some(metadata) = &issue.metadata {
            if seen_fingerprints.contains(&metadata.fingerprint) {
                continue;
            }
        }

        let Some((token, _rule)) = parse_tool_rule_title(&issue.title) else { continue };
        if !TRUNK_SUBLINTERS.contains(&token.as_str()) {
            continue;
        }

        let superseded_by_merge = admitted.iter().any(|f| f.tool == Tool::Trunk && leading_token(&f.title).as_deref() == Some(token.as_str()) && is_merged_finding(f));

        if superseded_by_merge {
            ops.push(Op::CloseIssue {
                number: issue.number,
                comment: Some(format!("Superseded: consolidated into a merged {label} finding for `{token}`.")),
            });
            closed_numbers.insert(issue.number);
            stats.closed += 1;
        }
    }
}

fn is_merged_finding(finding: &Finding) -> bool {
    finding.rule_id.contains('+') || finding.title.contains(MERGED_ACROSS_FILES_MARKER) || finding.title.contains(MERGED_OCCURRENCES_MARKER)
}

fn duplicate_collapse(existing: &[ExistingIssue], closed_numbers: &HashSet<i64>, ops: &mut Vec<Op>, stats: &mut Stats) {
    let mut groups: std::collections::HashMap<String, Vec<&ExistingIssue>> = std::collections::HashMap::new();
    for issue in existing {
        if !issue.is_open() || closed_numbers.contains(&issue.number) {
            continue;
        }
        groups.entry(normalize_title(&issue.title)).or_default().push(issue);
    }

    for mut group in groups.into_values() {
        if group.len() < 2 {
            continue;
        }
        group.sort_by_key(|issue| std::cmp::Reverse(issue.number));
        let keeper = group[0].number;
        for duplicate in &group[1..] {
            ops.push(Op::CloseIssue {
                number: duplicate.number,
                comment: Some(format!("Duplicate of #{keeper}.")),
            });
            stats.skipped_duplicate += 1;
            stats.closed += 1;
        }
    }
}
