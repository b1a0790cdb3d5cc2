// Modified: 2025-09-20

//! The abstract tracker adapter (spec.md §4.4).

use async_trait::async_trait;
use sync_core::{ExistingIssue, Result};

/// A label that must exist on the tracker before issues reference it.
#[derive(Debug, Clone)]
pub struct LabelSpec {
    pub name: String,
    pub color: String,
    pub description: Option<String>,
}

impl LabelSpec {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateIssueInput {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateIssueInput {
    pub number: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub labels: Option<Vec<String>>,
}

/// Capability set the reconciler consumes (spec.md §4.4). Every method
/// is a single awaitable tracker call — the reconciler's pure core never
/// calls these directly; only the executor in `sync-reconciler` does.
#[async_trait]
pub trait Tracker: Send + Sync {
    /// Idempotent creation of label definitions.
    async fn ensure_labels(&self, specs: &[LabelSpec]) -> Result<()>;

    /// All issues (any state) bearing every given label. The adapter
    /// parses the embedded markers in each issue's body into
    /// `.metadata` before returning (spec.md §4.4).
    async fn search_issues_by_label(&self, labels: &[String]) -> Result<Vec<ExistingIssue>>;

    async fn create_issue(&self, input: CreateIssueInput) -> Result<i64>;

    async fn update_issue(&self, input: UpdateIssueInput) -> Result<()>;

    async fn close_issue(&self, number: i64, comment: Option<String>) -> Result<()>;

    async fn add_issue_comment(&self, number: i64, body: String) -> Result<()>;
}
