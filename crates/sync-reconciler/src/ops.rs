// Modified: 2025-09-20

//! The reconciler's output vocabulary (spec.md §4.5): a sequence of
//! tracker operations plus the stats record. `reconcile` never calls a
//! `Tracker` itself — only `execute` (in `crate::executor`) does.

use sync_tracker::{CreateIssueInput, UpdateIssueInput};

#[derive(Debug, Clone)]
pub enum Op {
    CreateIssue(CreateIssueInput),
    UpdateIssue(UpdateIssueInput),
    CloseIssue { number: i64, comment: Option<String> },
    CommentIssue { number: i64, body: String },
}

/// Output statistics (spec.md §4.5, §6).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    pub created: u32,
    pub updated: u32,
    pub closed: u32,
    pub skipped_below_threshold: u32,
    pub skipped_duplicate: u32,
    pub skipped_max_reached: u32,
}
