// Modified: 2025-09-20

//! Title rendering (spec.md §4.6).

use sync_core::Finding;

/// Leaves room for a trailing `...` inside the 100-column cap (property 9).
const TRUNCATE_AT: usize = 97;

pub fn render_title(finding: &Finding, label: &str) -> String {
    let hint = location_hint(finding);
    let raw = format!("[{label}] {}{hint}", finding.title);
    truncate(&raw)
}

fn location_hint(finding: &Finding) -> String {
    let paths = finding.unique_paths();
    match paths.len() {
        0 => String::new(),
        1 => format!(" in {}", paths[0]),
        2 | 3 => format!(" in {} +{} more", paths[0], paths.len() - 1),
        _ => String::new(),
    }
}

fn truncate(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= 100 {
        return title.to_string();
    }

    let window_end = TRUNCATE_AT.min(chars.len());
    let cut = chars[..window_end].iter().rposition(|c| c.is_whitespace());

    let truncated: String = match cut {
        Some(i) if i > 0 => chars[..i].iter().collect(),
        _ => chars[..TRUNCATE_AT].iter().collect(),
    };
    format!("{truncated}...")
}
