//! Event entity - a normalized record of one GitHub activity
//!
//! A push with several commits produces one record per commit; an opened or
//! merged pull request produces exactly one record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::EventId;

/// Normalized action of a recorded event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventAction {
    /// A commit pushed to a branch
    Push,
    /// A pull request was opened
    PullRequest,
    /// A pull request was closed as merged
    Merge,
}

impl EventAction {
    /// All actions that may be stored
    pub const ALL: [EventAction; 3] = [Self::Push, Self::PullRequest, Self::Merge];

    /// Wire and storage representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "PUSH",
            Self::PullRequest => "PULL_REQUEST",
            Self::Merge => "MERGE",
        }
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventAction {
    type Err = EventActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUSH" => Ok(Self::Push),
            "PULL_REQUEST" => Ok(Self::PullRequest),
            "MERGE" => Ok(Self::Merge),
            other => Err(EventActionParseError(other.to_string())),
        }
    }
}

/// Error when a stored action string is not one of the known actions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event action: {0}")]
pub struct EventActionParseError(pub String);

/// Render a UTC instant the way generated timestamps are stored
///
/// Second precision with a `Z` suffix, so generated values sort alongside
/// GitHub's own commit timestamps.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// An event record that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    pub request_id: String,
    pub author: String,
    pub action: EventAction,
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: String,
}

impl NewEvent {
    /// Record for a single pushed commit
    pub fn push(
        request_id: impl Into<String>,
        author: impl Into<String>,
        to_branch: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            author: author.into(),
            action: EventAction::Push,
            from_branch: None,
            to_branch: to_branch.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Record for an opened or merged pull request
    ///
    /// `action` must be `PullRequest` or `Merge`.
    pub fn pull_request(
        action: EventAction,
        request_id: impl Into<String>,
        author: impl Into<String>,
        from_branch: impl Into<String>,
        to_branch: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        debug_assert!(action != EventAction::Push);
        Self {
            request_id: request_id.into(),
            author: author.into(),
            action,
            from_branch: Some(from_branch.into()),
            to_branch: to_branch.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Attach the identifier assigned by the store
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            request_id: self.request_id,
            author: self.author,
            action: self.action,
            from_branch: self.from_branch,
            to_branch: self.to_branch,
            timestamp: self.timestamp,
        }
    }
}

/// A stored event record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub request_id: String,
    pub author: String,
    pub action: EventAction,
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: String,
}
