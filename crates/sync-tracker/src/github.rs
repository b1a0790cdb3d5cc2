// Modified: 2025-09-20

//! `GithubTracker` — a GitHub-Issues-shaped REST implementation of
//! `Tracker` (spec.md §4.4, §6).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use sync_core::markers::{parse_fingerprint_marker, parse_run_metadata_marker};
use sync_core::{Error, ExistingIssue, IssueMetadata, IssueState, Result};

use crate::trait_def::{CreateIssueInput, LabelSpec, Tracker, UpdateIssueInput};

pub struct GithubTracker {
    client: Client,
    base_url: String,
    owner: String,
    repo: String,
    token: String,
}

impl GithubTracker {
    pub fn new(base_url: impl Into<String>, owner: impl Into<String>, repo: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}{}", self.base_url.trim_end_matches('/'), self.owner, self.repo, path)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "vibecheck-sync")
    }

    /// Map a non-success HTTP status into the §7 error taxonomy.
    fn status_error(&self, operation: &str, status: StatusCode, body: &str) -> Error {
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            Error::tracker_transient("github", format!("rate limited during {operation}: {status}"))
        } else if status.is_server_error() {
            Error::tracker_transient("github", format!("server error during {operation}: {status}"))
        } else {
            Error::tracker_permanent("github", format!("{operation} failed: {status} {body}"))
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateLabelBody<'a> {
    name: &'a str,
    color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CreateIssueBody<'a> {
    title: &'a str,
    body: &'a str,
    labels: &'a [String],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    assignees: &'a [String],
}

#[derive(Debug, Serialize)]
struct UpdateIssueBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CreateCommentBody<'a> {
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct GithubLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct GithubIssue {
    number: i64,
    state: String,
    title: String,
    body: Option<String>,
    labels: Vec<GithubLabel>,
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    number: i64,
}

impl From<GithubIssue> for ExistingIssue {
    fn from(issue: GithubIssue) -> Self {
        let body = issue.body.unwrap_or_default();
        let metadata = match (parse_fingerprint_marker(&body), parse_run_metadata_marker(&body)) {
            (Some(fingerprint), Some((last_seen_run, _timestamp))) => Some(IssueMetadata { fingerprint, last_seen_run }),
            _ => None,
        };

        ExistingIssue {
            number: issue.number,
            state: if issue.state == "open" { IssueState::Open } else { IssueState::Closed },
            title: issue.title,
            labels: issue.labels.into_iter().map(|l| l.name).collect(),
            metadata,
        }
    }
}

#[async_trait]
impl Tracker for GithubTracker {
    async fn ensure_labels(&self, specs: &[LabelSpec]) -> Result<()> {
        for spec in specs {
            let url = self.url("/labels");
            let response = self
                .request(reqwest::Method::POST, &url)
                .json(&CreateLabelBody {
                    name: &spec.name,
                    color: &spec.color,
                    description: spec.description.as_deref(),
                })
                .send()
                .await
                .map_err(|e| Error::tracker_transient("github", e.to_string()))?;

            // 422 means the label already exists — idempotent creation.
            if !response.status().is_success() && response.status() != StatusCode::UNPROCESSABLE_ENTITY {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(self.status_error("ensure_labels", status, &body));
            }
        }
        Ok(())
    }

    async fn search_issues_by_label(&self, labels: &[String]) -> Result<Vec<ExistingIssue>> {
        let url = self.url("/issues");
        let response = self
            .request(reqwest::Method::GET, &url)
            .query(&[("labels", labels.join(",")), ("state", "all".to_string()), ("per_page", "100".to_string())])
            .send()
            .await
            .map_err(|e| Error::tracker_transient("github", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error("search_issues_by_label", status, &body));
        }

        let issues: Vec<GithubIssue> = response.json().await.map_err(|e| Error::tracker_transient("github", e.to_string()))?;
        Ok(issues.into_iter().map(ExistingIssue::from).collect())
    }

    async fn create_issue(&self, input: CreateIssueInput) -> Result<i64> {
        let url = self.url("/issues");
        let response = self
            .request(reqwest::Method::POST, &url)
            .json(&CreateIssueBody {
                title: &input.title,
                body: &input.body,
                labels: &input.labels,
                assignees: &input.assignees,
            })
            .send()
            .await
            .map_err(|e| Error::tracker_transient("github", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error("create_issue", status, &body));
        }

        let created: CreatedIssue = response.json().await.map_err(|e| Error::tracker_transient("github", e.to_string()))?;
        Ok(created.number)
    }

    async fn update_issue(&self, input: UpdateIssueInput) -> Result<()> {
        let url = self.url(&format!("/issues/{}", input.number));
        let response = self
            .request(reqwest::Method::PATCH, &url)
            .json(&UpdateIssueBody {
                title: input.title.as_deref(),
                body: input.body.as_deref(),
                labels: input.labels.as_deref(),
                state: None,
            })
            .send()
            .await
            .map_err(|e| Error::tracker_transient("github", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error("update_issue", status, &body));
        }
        Ok(())
    }

    async fn close_issue(&self, number: i64, comment: Option<String>) -> Result<()> {
        if let Some(comment) = comment {
            self.add_issue_comment(number, comment).await?;
        }

        let url = self.url(&format!("/issues/{number}"));
        let response = self
            .request(reqwest::Method::PATCH, &url)
            .json(&UpdateIssueBody {
                title: None,
                body: None,
                labels: None,
                state: Some("closed"),
            })
            .send()
            .await
            .map_err(|e| Error::tracker_transient("github", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error("close_issue", status, &body));
        }
        Ok(())
    }

    async fn add_issue_comment(&self, number: i64, body: String) -> Result<()> {
        let url = self.url(&format!("/issues/{number}/comments"));
        let response = self
            .request(reqwest::Method::POST, &url)
            .json(&CreateCommentBody { body: &body })
            .send()
            .await
            .map_err(|e| Error::tracker_transient("github", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.status_error("add_issue_comment", status, &body));
        }
        Ok(())
    }
}
