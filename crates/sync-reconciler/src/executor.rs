// Modified: 2025-09-20

//! Drives a batch of `Op`s through a `Tracker`, one call at a time
//! (spec.md §5: tracker calls are serialized, no parallelism). Holds no
//! decision logic of its own — `engine::reconcile` already decided what
//! to do; this loop only does it, per-op errors degrading to a logged
//! skip rather than aborting the run (spec.md §7 "tracker permanent").

use sync_core::{Error, Result};
use sync_tracker::Tracker;

use crate::ops::Op;

/// Executes `ops` against `tracker`, returning `Ok(())` unless at least
/// one operation failed with a permanent tracker error, in which case
/// the first such error is returned after every op has been attempted
/// (spec.md §7: "reconciler skips the affected operation and
/// continues; final exit non-zero if any permanent error occurred").
pub async fn execute(tracker: &dyn Tracker, ops: Vec<Op>) -> Result<()> {
    let mut first_permanent_error: Option<Error> = None;

    for op in ops {
        let outcome = match op {
            Op::CreateIssue(input) => {
                let title = input.title.clone();
                tracker.create_issue(input).await.map(|_| ()).inspect_err(|error| {
                    tracing::error!(%title, %error, "failed to create issue");
                })
            }
            Op::UpdateIssue(input) => {
                let number = input.number;
                tracker.update_issue(input).await.inspect_err(|error| {
                    tracing::error!(number, %error, "failed to update issue");
                })
            }
            Op::CloseIssue { number, comment } => tracker.close_issue(number, comment).await.inspect_err(|error| {
                tracing::error!(number, %error, "failed to close issue");
            }),
            Op::CommentIssue { number, body } => tracker.add_issue_comment(number, body).await.inspect_err(|error| {
                tracing::error!(number, %error, "failed to comment on issue");
            }),
        };

        if let Err(error) = outcome {
            if first_permanent_error.is_none() {
                first_permanent_error = Some(error);
            }
        }
    }

    match first_permanent_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use sync_core::ExistingIssue;
    use sync_tracker::{CreateIssueInput, LabelSpec, UpdateIssueInput};

    use super::*;

    #[derive(Default)]
    struct RecordingTracker {
        created: Mutex<Vec<String>>,
        closed: Mutex<Vec<i64>>,
    }

    #[async_trait]
    impl Tracker for RecordingTracker {
        async fn ensure_labels(&self, _specs: &[LabelSpec]) -> Result<()> {
            Ok(())
        }

        async fn search_issues_by_label(&self, _labels: &[String]) -> Result<Vec<ExistingIssue>> {
            Ok(Vec::new())
        }

        async fn create_issue(&self, input: CreateIssueInput) -> Result<i64> {
            self.created.lock().unwrap().push(input.title);
            Ok(1)
        }

        async fn update_issue(&self, _input: UpdateIssueInput) -> Result<()> {
            Ok(())
        }

        async fn close_issue(&self, number: i64, _comment: Option<String>) -> Result<()> {
            self.closed.lock().unwrap().push(number);
            Ok(())
        }

        async fn add_issue_comment(&self, _number: i64, _body: String) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn executes_every_op_in_order() {
        let tracker = RecordingTracker::default();
        let ops = vec![
            Op::CreateIssue(CreateIssueInput {
                title: "first".to_string(),
                body: "body".to_string(),
                labels: vec![],
                assignees: vec![],
            }),
            Op::CloseIssue { number: 5, comment: None },
        ];

        execute(&tracker, ops).await.unwrap();

        assert_eq!(*tracker.created.lock().unwrap(), vec!["first".to_string()]);
        assert_eq!(*tracker.closed.lock().unwrap(), vec![5]);
    }

    struct FailingTracker;

    #[async_trait]
    impl Tracker for FailingTracker {
        async fn ensure_labels(&self, _specs: &[LabelSpec]) -> Result<()> {
            Ok(())
        }
        async fn search_issues_by_label(&self, _labels: &[String]) -> Result<Vec<ExistingIssue>> {
            Ok(Vec::new())
        }
        async fn create_issue(&self, _input: CreateIssueInput) -> Result<i64> {
            Err(Error::tracker_permanent("github", "forbidden"))
        }
        async fn update_issue(&self, _input: UpdateIssueInput) -> Result<()> {
            Ok(())
        }
        async fn close_issue(&self, _number: i64, _comment: Option<String>) -> Result<()> {
            Ok(())
        }
        async fn add_issue_comment(&self, _number: i64, _body: String) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn a_permanent_error_does_not_stop_later_ops_but_is_surfaced() {
        let tracker = FailingTracker;
        let ops = vec![
            Op::CreateIssue(CreateIssueInput {
                title: "a".to_string(),
                body: "b".to_string(),
                labels: vec![],
                assignees: vec![],
            }),
            Op::CloseIssue { number: 1, comment: None },
        ];

        let result = execute(&tracker, ops).await;
        assert!(result.is_err());
    }
}
