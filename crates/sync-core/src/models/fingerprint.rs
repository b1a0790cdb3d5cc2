// Modified: 2025-09-20

//! The `Fingerprint` value type (spec.md §4.2).
//!
//! This module only defines the *shape* of a fingerprint — a full
//! `sha256:<hex>` digest plus a 12-hex-character short form for display.
//! The digest algorithm itself (what gets hashed) lives in
//! `sync-fingerprint`, which depends on this crate; defining the value
//! type here avoids a dependency cycle between `Finding` and the crate
//! that computes its fingerprint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable identifier for a finding's semantic identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Construct from a full digest hex string (no `sha256:` prefix).
    pub fn from_digest_hex(hex: impl Into<String>) -> Self {
        Self(format!("sha256:{}", hex.into()))
    }

    /// The full `sha256:<hex>` form, as embedded in issue body markers.
    pub fn full(&self) -> &str {
        &self.0
    }

    /// A 12-hex-character short form for user-facing display.
    pub fn short(&self) -> &str {
        let hex = self.0.strip_prefix("sha256:").unwrap_or(&self.0);
        &hex[..hex.len().min(12)]
    }

    /// Parse a fingerprint back out of its full `sha256:<hex>` form, as
    /// read from an issue body marker. Returns `None` if the string
    /// doesn't look like one of ours.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with("sha256:") && s.len() > "sha256:".len() {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_is_twelve_hex_chars() {
        let fp = Fingerprint::from_digest_hex("a".repeat(64));
        assert_eq!(fp.short().len(), 12);
        assert_eq!(fp.short(), "a".repeat(12));
    }

    #[test]
    fn full_form_carries_prefix() {
        let fp = Fingerprint::from_digest_hex("deadbeef");
        assert_eq!(fp.full(), "sha256:deadbeef");
    }

    #[test]
    fn parse_round_trips() {
        let fp = Fingerprint::from_digest_hex("cafebabe");
        let parsed = Fingerprint::parse(fp.full()).unwrap();
        assert_eq!(fp, parsed);
    }

    #[test]
    fn parse_rejects_non_fingerprint_strings() {
        assert!(Fingerprint::parse("not-a-fingerprint").is_none());
        assert!(Fingerprint::parse("sha256:").is_none());
    }
}
