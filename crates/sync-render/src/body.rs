// Modified: 2025-09-20

//! Body rendering (spec.md §4.6). Every function here is pure: given
//! equal inputs, calling twice produces byte-identical Markdown, which
//! is what makes update idempotence possible (spec.md §9).

use std::collections::HashMap;

use sync_core::markers::{fingerprint_marker, run_metadata_marker};
use sync_core::{AutofixLevel, Finding, Location, RepoRef, Severity, BRANCH_PREFIX, REPO_HOST};

use crate::urls::rule_urls;

const MAX_INLINE_LOCATIONS: usize = 10;
const MAX_CODE_SAMPLES: usize = 3;
const MAX_SNIPPET_LINES: usize = 50;

pub fn render_body(finding: &Finding, repo: &RepoRef, run_number: i64, timestamp: &str) -> String {
    let mut out = String::new();

    out.push_str(&severity_line(finding));
    out.push_str("\n\n");
    out.push_str(&finding.message);
    out.push_str("\n\n");
    out.push_str(&details_table(finding));
    out.push('\n');

    if matches!(finding.severity, Severity::Critical | Severity::High) {
        out.push_str("\n> **This finding requires prompt attention.**\n");
    }

    out.push_str("\n## Location\n\n");
    out.push_str(&location_section(finding, repo));

    if let Some(samples) = code_samples_section(finding) {
        out.push_str("\n");
        out.push_str(&samples);
    }

    out.push_str("\n## How to Fix\n\n");
    out.push_str(&how_to_fix_section(finding));

    if let Some(references) = references_section(finding) {
        out.push_str("\n## References\n\n");
        out.push_str(&references);
    }

    out.push_str("\n");
    out.push_str(&metadata_section(finding, repo, run_number, timestamp));

    out.push('\n');
    out.push_str(&fingerprint_marker(&finding.fingerprint));
    out.push('\n');
    out.push_str(&run_metadata_marker(run_number, timestamp));
    out.push('\n');

    out
}

fn severity_emoji(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴",
        Severity::High => "🟠",
        Severity::Medium => "🟡",
        Severity::Low => "🔵",
    }
}

fn severity_line(finding: &Finding) -> String {
    format!(
        "{} **{}** severity · {} confidence · {} effort",
        severity_emoji(finding.severity),
        finding.severity,
        finding.confidence,
        finding.effort
    )
}

fn details_table(finding: &Finding) -> String {
    let rule_links: Vec<String> = rule_urls(&finding.tool, &finding.rule_id)
        .into_iter()
        .map(|(rule, url)| match url {
            Some(url) => format!("[`{rule}`]({url})"),
            None => format!("`{rule}`"),
        })
        .collect();

    format!(
        "| | |\n|---|---|\n| Tool | `{}` |\n| Rule | {} |\n| Layer | {} |\n| Autofix | {} |\n",
        finding.tool,
        rule_links.join(", "),
        finding.layer,
        autofix_note(finding.autofix)
    )
}

fn autofix_note(autofix: AutofixLevel) -> &'static str {
    match autofix {
        AutofixLevel::Safe => "✅ Safe autofix available",
        AutofixLevel::RequiresReview => "⚠️ Autofix requires review",
        AutofixLevel::None => "Manual fix required",
    }
}

fn location_url(repo: &RepoRef, location: &Location) -> String {
    match location.end_line {
        Some(end) if end != location.start_line => {
            format!("https://{REPO_HOST}/{}/{}/blob/{}/{}#L{}-L{}", repo.owner, repo.name, repo.commit, location.path, location.start_line, end)
        }
        _ => format!("https://{REPO_HOST}/{}/{}/blob/{}/{}#L{}", repo.owner, repo.name, repo.commit, location.path, location.start_line),
    }
}

fn location_section(finding: &Finding, repo: &RepoRef) -> String {
    let canonical = finding.canonical_location();
    let mut out = format!("- [`{}:{}`]({})\n", canonical.path, canonical.start_line, location_url(repo, canonical));

    let remainder = &finding.locations[1..];
    if !remainder.is_empty() {
        let links: String = remainder
            .iter()
            .map(|loc| format!("- [`{}:{}`]({})\n", loc.path, loc.start_line, location_url(repo, loc)))
            .collect();

        if remainder.len() <= MAX_INLINE_LOCATIONS {
            out.push_str(&links);
        } else {
            out.push_str("\n<details>\n<summary>");
            out.push_str(&format!("{} more locations", remainder.len()));
            out.push_str("</summary>\n\n");
            out.push_str(&links);
            out.push_str("\n</details>\n");
        }
    }

    if finding.locations.len() >= 5 {
        out.push('\n');
        out.push_str(&prioritization_hint(finding));
        out.push('\n');
    }

    out
}

fn prioritization_hint(finding: &Finding) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for loc in &finding.locations {
        *counts.entry(loc.path.as_str()).or_insert(0) += 1;
    }
    let (busiest_path, busiest_count) = counts.into_iter().max_by_key(|(_, count)| *count).expect("locations is non-empty");

    let unique_files = finding.unique_paths().len();
    if unique_files > 3 {
        format!("> Prioritize `{busiest_path}` ({busiest_count} occurrences); this finding spans {unique_files} files.")
    } else {
        format!("> Prioritize `{busiest_path}` ({busiest_count} occurrences).")
    }
}

fn code_samples_section(finding: &Finding) -> Option<String> {
    let snippet = finding.evidence.as_ref()?.snippet.as_ref()?;
    let segments: Vec<&str> = snippet.split("---").map(str::trim).filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return None;
    }

    let heading = if segments.len() == 1 { "Code Sample" } else { "Code Samples" };
    let mut out = format!("\n## {heading}\n\n");

    for segment in segments.iter().take(MAX_CODE_SAMPLES) {
        out.push_str("```\n");
        out.push_str(&truncate_snippet(segment));
        out.push_str("\n```\n\n");
    }

    if segments.len() > MAX_CODE_SAMPLES {
        out.push_str(&format!("_{} more sample(s) omitted._\n", segments.len() - MAX_CODE_SAMPLES));
    }

    Some(out)
}

fn truncate_snippet(snippet: &str) -> String {
    let lines: Vec<&str> = snippet.lines().collect();
    if lines.len() <= MAX_SNIPPET_LINES {
        lines.join("\n")
    } else {
        let mut truncated = lines[..MAX_SNIPPET_LINES].join("\n");
        truncated.push_str("\n... (truncated)");
        truncated
    }
}

fn how_to_fix_section(finding: &Finding) -> String {
    match &finding.suggested_fix {
        Some(fix) => {
            let steps: String = fix.steps.iter().enumerate().map(|(i, step)| format!("{}. {step}\n", i + 1)).collect();
            let acceptance: String = fix.acceptance.iter().map(|item| format!("- [ ] {item}\n")).collect();
            format!("**Goal:** {}\n\n**Steps:**\n\n{steps}\n**Done when:**\n\n{acceptance}", fix.goal)
        }
        None => format!(
            "**Goal:** Resolve the `{}:{}` finding.\n\n**Steps:**\n\n1. Review the flagged location.\n2. Address the underlying cause of the violation.\n3. Re-run the analyzer to confirm resolution.\n\n**Done when:**\n\n- [ ] The analyzer no longer reports this finding.\n",
            finding.tool, finding.rule_id
        ),
    }
}

fn references_section(finding: &Finding) -> Option<String> {
    let links = finding.evidence.as_ref()?.links.as_ref()?;
    let http_links: Vec<&String> = links.iter().filter(|link| link.starts_with("http")).collect();
    if http_links.is_empty() {
        return None;
    }
    Some(http_links.iter().map(|link| format!("- {link}\n")).collect())
}

fn metadata_section(finding: &Finding, repo: &RepoRef, run_number: i64, timestamp: &str) -> String {
    let commit_short = &repo.commit[..repo.commit.len().min(7)];
    format!(
        "<details>\n<summary>Metadata</summary>\n\n- Fingerprint: `{}` (`{}`)\n- Commit: [`{}`](https://{REPO_HOST}/{}/{}/commit/{})\n- Run: {}\n- Timestamp: {}\n- Suggested branch: `{}/fix-{}`\n\n</details>\n",
        finding.fingerprint.short(),
        finding.fingerprint.full(),
        commit_short,
        repo.owner,
        repo.name,
        repo.commit,
        run_number,
        timestamp,
        BRANCH_PREFIX,
        finding.fingerprint.short(),
    )
}
