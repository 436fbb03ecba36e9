//! GitHub event type extractor
//!
//! Reads the `X-GitHub-Event` header. A missing or non-UTF-8 header is
//! treated as `ping`, so this extractor never rejects.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use hook_core::GitHubEventKind;

/// Header GitHub uses to name the delivered event
pub const GITHUB_EVENT_HEADER: &str = "x-github-event";

/// The event type of a webhook delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubEvent(pub GitHubEventKind);

#[async_trait]
impl<S> FromRequestParts<S> for GitHubEvent
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(GITHUB_EVENT_HEADER)
            .and_then(|v| v.to_str().ok());

        Ok(Self(GitHubEventKind::from_header(value)))
    }
}
