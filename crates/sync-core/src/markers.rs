// Modified: 2025-09-20

//! The two hidden HTML-comment markers embedded in issue bodies
//! (spec.md §6). Construction lives here alongside parsing so the
//! renderer (which builds them) and the tracker adapter (which reads
//! them back) can never drift on the exact marker string shape.

use regex::Regex;
use std::sync::OnceLock;

use crate::constants::{FINGERPRINT_MARKER_ANCHOR, RUN_METADATA_MARKER_ANCHOR};
use crate::models::Fingerprint;

/// Render the fingerprint marker for embedding in an issue body.
pub fn fingerprint_marker(fingerprint: &Fingerprint) -> String {
    format!("<!-- {FINGERPRINT_MARKER_ANCHOR}: {} -->", fingerprint.full())
}

/// Render the run-metadata marker for embedding in an issue body.
pub fn run_metadata_marker(run_number: i64, timestamp: &str) -> String {
    format!("<!-- {RUN_METADATA_MARKER_ANCHOR}: runNumber={run_number} timestamp={timestamp} -->")
}

fn fingerprint_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"{FINGERPRINT_MARKER_ANCHOR}:\s*(sha256:[0-9a-f]+)")).unwrap())
}

fn run_metadata_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"{RUN_METADATA_MARKER_ANCHOR}:\s*runNumber=(-?\d+)\s+timestamp=(\S+)")).unwrap())
}

/// Parse the fingerprint marker out of an issue body, if present and
/// well-formed. A missing or malformed marker degrades to `None` rather
/// than an error (spec.md §7) — the caller falls through to fallback
/// matching.
pub fn parse_fingerprint_marker(body: &str) -> Option<Fingerprint> {
    let captures = fingerprint_marker_re().captures(body)?;
    Fingerprint::parse(&captures[1])
}

/// Parse the run-metadata marker out of an issue body, returning
/// `(runNumber, timestamp)`.
pub fn parse_run_metadata_marker(body: &str) -> Option<(i64, String)> {
    let captures = run_metadata_marker_re().captures(body)?;
    let run_number: i64 = captures[1].parse().ok()?;
    Some((run_number, captures[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_round_trip() {
        let fp = Fingerprint::from_digest_hex("deadbeef");
        let body = format!(
            "Some text.\n\n{}\n{}\n",
            fingerprint_marker(&fp),
            run_metadata_marker(7, "2026-07-26T12:00:00+00:00")
        );

        assert_eq!(parse_fingerprint_marker(&body), Some(fp));
        assert_eq!(parse_run_metadata_marker(&body), Some((7, "2026-07-26T12:00:00+00:00".to_string())));
    }

    #[test]
    fn malformed_markers_parse_to_none() {
        assert_eq!(parse_fingerprint_marker("no markers here"), None);
        assert_eq!(parse_run_metadata_marker("<!-- vibecheck:run garbage -->"), None);
    }
}
