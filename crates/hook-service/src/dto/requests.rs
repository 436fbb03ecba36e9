//! Webhook payload DTOs
//!
//! Only the fields the receiver reads are modelled; everything else GitHub
//! sends is ignored. Every field is optional so partial payloads still
//! classify, falling back to the documented defaults.

use serde::Deserialize;
use serde_json::Value;

/// Placeholder for a missing author or branch
pub const UNKNOWN: &str = "unknown";

// ============================================================================
// Push
// ============================================================================

/// `push` event payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub pusher: Option<Pusher>,

    /// Full ref, e.g. `refs/heads/main`
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,

    #[serde(default)]
    pub commits: Vec<PushCommit>,
}

impl PushPayload {
    /// Pusher name, or `unknown`
    pub fn author(&self) -> &str {
        self.pusher
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or(UNKNOWN)
    }

    /// Last `/`-separated segment of `ref`, or `unknown` when `ref` is absent or empty
    pub fn target_branch(&self) -> &str {
        match self.git_ref.as_deref() {
            Some(git_ref) if !git_ref.is_empty() => git_ref.rsplit('/').next().unwrap_or(git_ref),
            _ => UNKNOWN,
        }
    }
}

/// The user who pushed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pusher {
    #[serde(default)]
    pub name: Option<String>,
}

/// One commit of a push
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushCommit {
    #[serde(default)]
    pub id: Option<String>,

    /// ISO-8601 commit timestamp as GitHub sent it
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ============================================================================
// Pull Request
// ============================================================================

/// `pull_request` event payload, top level
///
/// Both fields stay raw until their truthiness has been checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestDelivery {
    #[serde(default)]
    pub action: Option<Value>,

    #[serde(default)]
    pub pull_request: Option<Value>,
}

/// The `pull_request` object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestDetails {
    /// Numeric id on GitHub; accepted as any JSON scalar
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub user: Option<GitHubUser>,

    /// Source branch
    #[serde(default)]
    pub head: Option<GitRef>,

    /// Target branch
    #[serde(default)]
    pub base: Option<GitRef>,

    #[serde(default)]
    pub merged: Option<Value>,
}

impl PullRequestDetails {
    /// The pull request id rendered as a string, empty when absent
    pub fn request_id(&self) -> String {
        match &self.id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Author login, or `unknown`
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.login.as_deref())
            .unwrap_or(UNKNOWN)
    }

    /// Source branch name, empty when absent
    pub fn from_branch(&self) -> &str {
        GitRef::name_of(self.head.as_ref())
    }

    /// Target branch name, empty when absent
    pub fn to_branch(&self) -> &str {
        GitRef::name_of(self.base.as_ref())
    }

    /// Whether the `merged` flag is truthy
    pub fn is_merged(&self) -> bool {
        self.merged.as_ref().is_some_and(hook_core::is_truthy)
    }
}

/// A GitHub account reference
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubUser {
    #[serde(default)]
    pub login: Option<String>,
}

/// A branch reference (`head` / `base`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref", default)]
    pub ref_name: Option<String>,
}

impl GitRef {
    fn name_of(git_ref: Option<&GitRef>) -> &str {
        git_ref.and_then(|r| r.ref_name.as_deref()).unwrap_or("")
    }
}
