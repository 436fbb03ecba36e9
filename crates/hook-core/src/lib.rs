//! # hook-core
//!
//! Domain layer containing the event record entity, the webhook classification
//! vocabulary, and the event store trait.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;
pub mod webhook;

// Re-export commonly used types at crate root
pub use entities::{format_timestamp, Event, EventAction, EventActionParseError, NewEvent};
pub use error::DomainError;
pub use traits::{EventRepository, RepoResult};
pub use value_objects::{EventId, EventIdParseError};
pub use webhook::{is_truthy, Classification, GitHubEventKind, IgnoreReason, PullRequestAction};
