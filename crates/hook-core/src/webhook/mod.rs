//! Webhook classification vocabulary
//!
//! An inbound delivery is classified exactly once into a [`Classification`];
//! the receiver then either stores the produced records or drops the delivery.

use serde_json::Value;
use std::fmt;

use crate::entities::{EventAction, NewEvent};

/// Event type announced by the `X-GitHub-Event` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubEventKind {
    Push,
    PullRequest,
    Ping,
    Other(String),
}

impl GitHubEventKind {
    /// Event type assumed when the header is absent
    pub const DEFAULT: &'static str = "ping";

    /// Classify a raw header value, treating a missing header as `ping`
    pub fn from_header(value: Option<&str>) -> Self {
        Self::from(value.unwrap_or(Self::DEFAULT))
    }

    /// The event type as GitHub names it
    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
            Self::Ping => "ping",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for GitHubEventKind {
    fn from(value: &str) -> Self {
        match value {
            "push" => Self::Push,
            "pull_request" => Self::PullRequest,
            "ping" => Self::Ping,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for GitHubEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The top-level `action` of a `pull_request` delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestAction {
    Opened,
    Closed,
    Other(String),
}

impl PullRequestAction {
    /// The stored action for this delivery, if it is recorded at all
    ///
    /// `opened` is recorded as a pull request; `closed` only when merged.
    pub fn stored_action(&self, merged: bool) -> Option<EventAction> {
        match self {
            Self::Opened => Some(EventAction::PullRequest),
            Self::Closed if merged => Some(EventAction::Merge),
            Self::Closed | Self::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for PullRequestAction {
    fn from(value: &str) -> Self {
        match value {
            "opened" => Self::Opened,
            "closed" => Self::Closed,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Why a well-formed delivery produced no records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The event type is not one the receiver records
    UnhandledEventType(String),
    /// `pull_request` or `action` missing from a pull request delivery
    MissingPullRequest,
    /// A pull request action other than opened or merged
    IrrelevantPullRequestAction(String),
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnhandledEventType(kind) => write!(f, "unhandled event type: {kind}"),
            Self::MissingPullRequest => f.write_str("missing pull_request or action in payload"),
            Self::IrrelevantPullRequestAction(action) => {
                write!(f, "ignored pull request action: {action}")
            }
        }
    }
}

/// Outcome of classifying one delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Records to append, in order. May be empty (a push without commits).
    Record(Vec<NewEvent>),
    /// Nothing to store
    Ignore(IgnoreReason),
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
