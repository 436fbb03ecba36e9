//! Webhook receiver handler

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use hook_service::{IngestOutcome, WebhookService};
use tracing::info;

use crate::extractors::{GitHubEvent, WebhookPayload};
use crate::response::{ApiResult, NoContent, Received};
use crate::state::AppState;

/// Receive a GitHub webhook delivery
///
/// POST /webhook/receiver
///
/// 200 when the delivery was recorded (even with zero commits), 204 when it
/// was ignored.
pub async fn receive(
    State(state): State<AppState>,
    GitHubEvent(kind): GitHubEvent,
    WebhookPayload(payload): WebhookPayload,
) -> ApiResult<Response> {
    info!(event_type = %kind, "Webhook delivery received");

    let service = WebhookService::new(state.service_context());
    let response = match service.ingest(&kind, &payload).await? {
        IngestOutcome::Recorded { .. } => Received.into_response(),
        IngestOutcome::Ignored(_) => NoContent.into_response(),
    };

    Ok(response)
}
