// Modified: 2025-09-20

//! `withRateLimit` — pacing and bounded-backoff retry decorator
//! (spec.md §4.4, §5, §7).

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

use sync_core::{Error, ExistingIssue, Result};

use crate::trait_def::{CreateIssueInput, LabelSpec, Tracker, UpdateIssueInput};

/// Wraps any `Tracker` with a minimum inter-call delay and bounded
/// exponential backoff on retryable errors (spec.md §4.4's
/// `withRateLimit`, §5's timeout/backoff requirement).
pub struct RateLimited<T: Tracker> {
    inner: T,
    min_interval: Duration,
    max_attempts: u32,
    base_backoff: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl<T: Tracker> RateLimited<T> {
    pub fn new(inner: T) -> Self {
        Self::with_policy(inner, Duration::from_millis(250), 5, Duration::from_millis(500))
    }

    pub fn with_policy(inner: T, min_interval: Duration, max_attempts: u32, base_backoff: Duration) -> Self {
        Self {
            inner,
            min_interval,
            max_attempts,
            base_backoff,
            last_call: Mutex::new(None),
        }
    }

    async fn pace(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        *last_call = Some(Instant::now());
    }

    async fn with_rate_limit<R, F, Fut>(&self, operation: &str, factory: F) -> Result<R>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        let mut attempt: u32 = 0;
        loop {
            self.pace().await;
            match factory().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt + 1 < self.max_attempts => {
                    attempt += 1;
                    let backoff = self.base_backoff * 2u32.pow(attempt - 1);
                    tracing::warn!(operation, attempt, backoff_ms = backoff.as_millis() as u64, "retrying tracker call");
                    sleep(backoff).await;
                }
                Err(err) if err.is_retryable() => {
                    tracing::error!(operation, attempt, "exhausted retries");
                    return Err(Error::tracker_permanent("tracker", format!("exhausted retries for {operation}: {err}")));
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[async_trait]
impl<T: Tracker> Tracker for RateLimited<T> {
    async fn ensure_labels(&self, specs: &[LabelSpec]) -> Result<()> {
        self.with_rate_limit("ensure_labels", || self.inner.ensure_labels(specs)).await
    }

    async fn search_issues_by_label(&self, labels: &[String]) -> Result<Vec<ExistingIssue>> {
        self.with_rate_limit("search_issues_by_label", || self.inner.search_issues_by_label(labels)).await
    }

    async fn create_issue(&self, input: CreateIssueInput) -> Result<i64> {
        self.with_rate_limit("create_issue", || self.inner.create_issue(input.clone())).await
    }

    async fn update_issue(&self, input: UpdateIssueInput) -> Result<()> {
        self.with_rate_limit("update_issue", || self.inner.update_issue(input.clone())).await
    }

    async fn close_issue(&self, number: i64, comment: Option<String>) -> Result<()> {
        self.with_rate_limit("close_issue", || self.inner.close_issue(number, comment.clone())).await
    }

    async fn add_issue_comment(&self, number: i64, body: String) -> Result<()> {
        self.with_rate_limit("add_issue_comment", || self.inner.add_issue_comment(number, body.clone())).await
    }
}
