//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (13+)
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Receiver Tests
// ============================================================================

#[tokio::test]
async fn test_push_is_stored() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let commit = unique_id("commit");
    let payload = push_payload("alice", "refs/heads/main", &[(commit.as_str(), "2024-01-01T00:00:00Z")]);

    let response = server.deliver("push", &payload).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Receiver Work Successfully");

    let stored = server.stored(&commit).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].author, "alice");
    assert_eq!(stored[0].action.as_str(), "PUSH");
    assert!(stored[0].from_branch.is_none());
    assert_eq!(stored[0].to_branch, "main");
    assert_eq!(stored[0].timestamp, "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_push_with_several_commits() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let ids: Vec<String> = (0..3).map(|_| unique_id("multi")).collect();
    let commits: Vec<(&str, &str)> = ids
        .iter()
        .map(|id| (id.as_str(), "2024-02-01T00:00:00Z"))
        .collect();

    let response = server
        .deliver("push", &push_payload("alice", "refs/heads/dev", &commits))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    for id in &ids {
        let stored = server.stored(id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].to_branch, "dev");
    }
}

#[tokio::test]
async fn test_pull_request_opened_and_merged() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pr = unique_id("pr");

    let opened = pull_request_payload("opened", &pr, "bob", "feature", "main", false);
    let response = server.deliver("pull_request", &opened).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let merged = pull_request_payload("closed", &pr, "bob", "feature", "main", true);
    let response = server.deliver("pull_request", &merged).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let mut actions: Vec<_> = server
        .stored(&pr)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.action.as_str().to_string())
        .collect();
    actions.sort();
    assert_eq!(actions, ["MERGE", "PULL_REQUEST"]);
}

#[tokio::test]
async fn test_pull_request_closed_without_merge_is_ignored() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pr = unique_id("closed");

    let payload = pull_request_payload("closed", &pr, "bob", "feature", "main", false);
    let response = server.deliver("pull_request", &payload).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert!(server.stored(&pr).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ping_is_ignored() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.deliver("ping", &ping_payload()).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_non_json_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let commit = unique_id("form");
    let body = push_payload("alice", "refs/heads/main", &[(commit.as_str(), "2024-01-01T00:00:00Z")]);

    let response = server
        .post_raw("/webhook/receiver", "text/plain", &body.to_string())
        .await
        .unwrap();
    let error: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "Invalid content type or empty payload.");
    assert_eq!(error.code, "INVALID_CONTENT_TYPE");

    assert!(server.stored(&commit).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_payload_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post("/webhook/receiver", &json!({})).await.unwrap();
    let error: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error, "No JSON payload received.");
}

// ============================================================================
// Dashboard Tests
// ============================================================================

#[tokio::test]
async fn test_events_feed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let commit = unique_id("feed");
    let payload = push_payload("carol", "refs/heads/main", &[(commit.as_str(), "9999-12-31T23:59:59Z")]);
    server.deliver("push", &payload).await.unwrap();

    let response = server.get("/webhook/events").await.unwrap();
    let events: Vec<EventJson> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!events.is_empty());
    assert!(events.len() <= 10);
    assert!(events.iter().all(|e| !e.id.is_empty()));
    assert!(events
        .windows(2)
        .all(|w| w[0].timestamp.as_bytes() >= w[1].timestamp.as_bytes()));
}

#[tokio::test]
async fn test_event_table_page() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/webhook/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = response.text().await.unwrap();
    assert!(html.contains("<th>Author</th>"));
    assert!(html.contains("Showing the latest 10 events"));
}

#[tokio::test]
async fn test_dashboard_pages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Welcome"));

    let response = server.get("/webhook/ui").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("setInterval(loadEvents, 15000)"));
}
