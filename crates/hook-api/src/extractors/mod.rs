//! Axum extractors for request handling
//!
//! Custom extractors for the webhook receiver.

mod github_event;
mod payload;

pub use github_event::{GitHubEvent, GITHUB_EVENT_HEADER};
pub use payload::WebhookPayload;
