// Modified: 2025-09-20

//! `normalizeTitle` (spec.md §4.5c): lowercases, strips the `[label]`
//! prefix, removes ` (N occurrences)` suffixes and trailing ` in
//! <file>`, collapses whitespace. Used to group open issues for
//! duplicate collapse.

use std::sync::OnceLock;

use regex::Regex;
use sync_core::utils::collapse_whitespace;

fn occurrences_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s*\(\d+\s+occurrences\)\s*$").unwrap())
}

fn trailing_in_file() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s+in\s+\S+(\s+\+\d+\s+more)?\s*$").unwrap())
}

pub fn normalize_title(title: &str) -> String {
    let without_label = match title.split_once(']') {
        Some((_, rest)) => rest.trim_start(),
        None => title,
    };
    let without_occurrences = occurrences_suffix().replace(without_label, "");
    let without_file = trailing_in_file().replace(&without_occurrences, "");
    collapse_whitespace(&without_file.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_label_prefix() {
        assert_eq!(normalize_title("[vibeCheck] Something wrong"), "something wrong");
    }

    #[test]
    fn strips_occurrences_suffix() {
        assert_eq!(normalize_title("[vibeCheck] Dup issue (3 occurrences)"), "dup issue");
    }

    #[test]
    fn strips_trailing_in_file_hint() {
        assert_eq!(normalize_title("[vibeCheck] 'x' is unused in src/a.ts"), "'x' is unused");
    }

    #[test]
    fn strips_trailing_in_file_plus_more_hint() {
        assert_eq!(normalize_title("[vibeCheck] dup in a.ts +2 more"), "dup");
    }

    #[test]
    fn two_titles_differing_only_by_location_hint_normalize_equal() {
        let a = normalize_title("[vibeCheck] 'x' is unused in src/a.ts");
        let b = normalize_title("[vibeCheck] 'x' is unused in src/b.ts");
        assert_eq!(a, b);
    }
}
