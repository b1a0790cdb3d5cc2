// Modified: 2025-09-20

//! The tracker's existing-issue view (spec.md §3).

use serde::{Deserialize, Serialize};

use super::fingerprint::Fingerprint;

/// Open/closed lifecycle state of a tracker issue (spec.md §3). An
/// `ExistingIssue`'s lifecycle is created → updated (0..N) → closed,
/// terminal with respect to this system — it never reopens one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// Metadata recovered from an issue's hidden body markers (spec.md §4.4,
/// §6). Absent when the markers are missing or malformed — a parsing
/// failure degrades to "no metadata present" rather than an error
/// (spec.md §7), so the issue falls through to fallback matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueMetadata {
    pub fingerprint: Fingerprint,
    pub last_seen_run: i64,
}

/// A view of one of the tracker's issues (spec.md §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingIssue {
    pub number: i64,
    pub state: IssueState,
    pub title: String,
    pub labels: Vec<String>,
    pub metadata: Option<IssueMetadata>,
}

impl ExistingIssue {
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }
}
