// Modified: 2025-09-20

//! Message normalization and line bucketing (spec.md §4.2).

use regex::Regex;
use std::sync::OnceLock;
use sync_core::utils::collapse_whitespace;

fn quoted_literal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""[^"]*"|'[^']*'"#).unwrap())
}

fn numeral_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// Normalize a finding's message for fingerprinting: lowercase,
/// whitespace-collapsed, with quoted literals and numerals stripped so
/// that two findings differing only in an identifier name or a line
/// number in the message text still collapse to the same fingerprint.
pub fn normalize_message(message: &str) -> String {
    let without_quotes = quoted_literal_re().replace_all(message, "");
    let without_numerals = numeral_re().replace_all(&without_quotes, "");
    collapse_whitespace(&without_numerals.to_lowercase())
}

/// `⌊startLine / 20⌋` — absorbs minor code drift (spec.md §4.2).
pub fn line_bucket(start_line: u32) -> u32 {
    start_line / 20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_quoted_literals_and_numerals() {
        let normalized = normalize_message(r#"Variable 'count42' is unused on line 17"#);
        assert_eq!(normalized, "variable is unused on line");
    }

    #[test]
    fn collapses_and_lowercases() {
        assert_eq!(normalize_message("  Extra   Whitespace  "), "extra whitespace");
    }

    #[test]
    fn line_bucket_absorbs_drift_within_window() {
        assert_eq!(line_bucket(42), line_bucket(48));
        assert_ne!(line_bucket(42), line_bucket(61));
    }
}
