// Modified: 2025-09-20

//! Wiremock-backed contract tests for `GithubTracker` (SPEC_FULL.md §6).

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sync_tracker::trait_def::CreateIssueInput;
use sync_tracker::{GithubTracker, Tracker};

fn tracker(server: &MockServer) -> GithubTracker {
    GithubTracker::new(server.uri(), "owner", "repo", "test-token")
}

#[tokio::test]
async fn create_issue_returns_the_assigned_number() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/owner/repo/issues"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"number": 42})))
        .mount(&server)
        .await;

    let tracker = tracker(&server);
    let number = tracker
        .create_issue(CreateIssueInput {
            title: "[vibeCheck] no-unused-vars in src/a.ts".to_string(),
            body: "body".to_string(),
            labels: vec!["vibeCheck".to_string()],
            assignees: vec![],
        })
        .await
        .unwrap();

    assert_eq!(number, 42);
}

#[tokio::test]
async fn search_issues_parses_fingerprint_and_run_metadata_markers() {
    let server = MockServer::start().await;
    let body = format!(
        "Finding body.\n\n<!-- vibecheck:fingerprint: sha256:{} -->\n<!-- vibecheck:run: runNumber=5 timestamp=2026-07-26T00:00:00+00:00 -->",
        "a".repeat(64)
    );

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"number": 7, "state": "open", "title": "[vibeCheck] title", "body": body, "labels": [{"name": "vibeCheck"}]}
        ])))
        .mount(&server)
        .await;

    let tracker = tracker(&server);
    let issues = tracker.search_issues_by_label(&["vibeCheck".to_string()]).await.unwrap();

    assert_eq!(issues.len(), 1);
    let metadata = issues[0].metadata.as_ref().expect("metadata should parse");
    assert_eq!(metadata.last_seen_run, 5);
    assert_eq!(metadata.fingerprint.full(), format!("sha256:{}", "a".repeat(64)));
}

#[tokio::test]
async fn missing_markers_yield_no_metadata_rather_than_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"number": 8, "state": "open", "title": "hand-filed issue", "body": "no markers here", "labels": []}
        ])))
        .mount(&server)
        .await;

    let tracker = tracker(&server);
    let issues = tracker.search_issues_by_label(&["vibeCheck".to_string()]).await.unwrap();

    assert_eq!(issues.len(), 1);
    assert!(issues[0].metadata.is_none());
}

#[tokio::test]
async fn server_error_surfaces_as_transient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/issues"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let tracker = tracker(&server);
    let result = tracker.search_issues_by_label(&["vibeCheck".to_string()]).await;
    assert!(matches!(result, Err(sync_core::Error::TrackerTransient { .. })));
}

#[tokio::test]
async fn auth_failure_surfaces_as_permanent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/issues"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let tracker = tracker(&server);
    let result = tracker.search_issues_by_label(&["vibeCheck".to_string()]).await;
    assert!(matches!(result, Err(sync_core::Error::TrackerPermanent { .. })));
}
