// Modified: 2025-09-20

//! Run context (spec.md §3).

use serde::{Deserialize, Serialize};

use super::issue_config::IssueConfig;

/// Identifies the repository a run is analyzing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
    pub commit: String,
}

/// `(repo{owner,name,commit}, runNumber, config)` (spec.md §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunContext {
    pub repo: RepoRef,
    pub run_number: i64,
    pub config: IssueConfig,
}
