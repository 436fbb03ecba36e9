//! Webhook payload extractor
//!
//! Accepts `application/json` and `application/*+json` bodies. The body must
//! parse as JSON and be truthy: `{}`, `[]`, `""`, `0`, `false` and `null`
//! are all treated as "no payload". A body that cannot be read at all keeps
//! the status of the underlying rejection (413 past the size limit).

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use hook_core::is_truthy;
use serde_json::Value;

use crate::response::ApiError;

/// A non-empty JSON webhook body, not yet interpreted
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookPayload(pub Value);

#[async_trait]
impl<S> FromRequest<S> for WebhookPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(ApiError::InvalidContentType);
        }

        let body = Bytes::from_request(req, state).await?;

        serde_json::from_slice::<Value>(&body)
            .ok()
            .filter(is_truthy)
            .map(Self)
            .ok_or(ApiError::EmptyPayload)
    }
}

/// Whether the request declares a JSON media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
