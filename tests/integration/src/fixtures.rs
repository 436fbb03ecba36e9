//! Test fixtures and data generators
//!
//! GitHub webhook payloads trimmed to the fields the receiver reads, with
//! unique ids so concurrent tests never see each other's records.

use serde::Deserialize;
use serde_json::{json, Value};

/// Unique commit or pull request id
pub fn unique_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

/// `push` payload with one commit per `(id, timestamp)` pair
pub fn push_payload(pusher: &str, git_ref: &str, commits: &[(&str, &str)]) -> Value {
    let commits: Vec<_> = commits
        .iter()
        .map(|(id, timestamp)| {
            json!({
                "id": id,
                "message": "test commit",
                "timestamp": timestamp
            })
        })
        .collect();

    json!({
        "ref": git_ref,
        "pusher": {"name": pusher, "email": format!("{pusher}@example.com")},
        "repository": {"full_name": "acme/widgets"},
        "commits": commits
    })
}

/// `pull_request` payload
pub fn pull_request_payload(
    action: &str,
    id: &str,
    author: &str,
    head: &str,
    base: &str,
    merged: bool,
) -> Value {
    json!({
        "action": action,
        "number": 1,
        "pull_request": {
            "id": id,
            "user": {"login": author},
            "head": {"ref": head},
            "base": {"ref": base},
            "merged": merged
        }
    })
}

/// `ping` payload GitHub sends when a hook is created
pub fn ping_payload() -> Value {
    json!({
        "zen": "Keep it logically awesome.",
        "hook_id": 1
    })
}

/// One element of `/webhook/events`
#[derive(Debug, Deserialize)]
pub struct EventJson {
    #[serde(rename = "_id")]
    pub id: String,
    pub request_id: String,
    pub author: String,
    pub action: String,
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: String,
}

/// Error body returned for 4xx/5xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorJson {
    pub error: String,
    pub code: String,
}
