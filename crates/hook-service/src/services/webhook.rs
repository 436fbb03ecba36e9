//! Webhook service
//!
//! Turns a GitHub delivery into zero or more event records. Classification is
//! pure and computed once per delivery; ingestion appends the records one by
//! one, so a storage failure midway leaves the earlier records in place.

use chrono::{DateTime, Utc};
use hook_core::{
    format_timestamp, is_truthy, Classification, GitHubEventKind, IgnoreReason, NewEvent,
    PullRequestAction,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::dto::{PullRequestDelivery, PullRequestDetails, PushPayload};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// What the receiver did with a delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The delivery was relevant; `count` records were stored (possibly zero)
    Recorded { count: usize },
    /// The delivery was well-formed but not something we record
    Ignored(IgnoreReason),
}

/// Webhook ingestion service
pub struct WebhookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebhookService<'a> {
    /// Create a new WebhookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Classify a delivery without touching the store
    ///
    /// `received_at` stamps pull request records and push commits that carry
    /// no timestamp of their own.
    pub fn classify(
        kind: &GitHubEventKind,
        payload: &Value,
        received_at: DateTime<Utc>,
    ) -> ServiceResult<Classification> {
        match kind {
            GitHubEventKind::Push => classify_push(payload, received_at),
            GitHubEventKind::PullRequest => classify_pull_request(payload, received_at),
            GitHubEventKind::Ping | GitHubEventKind::Other(_) => Ok(Classification::Ignore(
                IgnoreReason::UnhandledEventType(kind.to_string()),
            )),
        }
    }

    /// Classify a delivery and append every resulting record
    #[instrument(skip(self, payload), fields(event_type = %kind))]
    pub async fn ingest(
        &self,
        kind: &GitHubEventKind,
        payload: &Value,
    ) -> ServiceResult<IngestOutcome> {
        debug!(payload = %payload, "Payload received");

        match Self::classify(kind, payload, Utc::now())? {
            Classification::Ignore(reason) => {
                info!(reason = %reason, "Webhook ignored");
                Ok(IngestOutcome::Ignored(reason))
            }
            Classification::Record(records) => {
                for record in &records {
                    let id = self.ctx.event_repo().append(record).await?;
                    info!(
                        event_id = %id,
                        action = %record.action,
                        request_id = %record.request_id,
                        author = %record.author,
                        "Event saved"
                    );
                }
                Ok(IngestOutcome::Recorded {
                    count: records.len(),
                })
            }
        }
    }
}

fn ensure_object(payload: &Value) -> ServiceResult<()> {
    if payload.is_object() {
        Ok(())
    } else {
        Err(ServiceError::unexpected_payload("expected a JSON object"))
    }
}

fn read<'de, T: Deserialize<'de>>(value: &'de Value) -> ServiceResult<T> {
    T::deserialize(value).map_err(|e| ServiceError::unexpected_payload(e.to_string()))
}

/// One PUSH record per commit
fn classify_push(payload: &Value, received_at: DateTime<Utc>) -> ServiceResult<Classification> {
    ensure_object(payload)?;
    let push: PushPayload = read(payload)?;

    let author = push.author();
    let to_branch = push.target_branch();
    let fallback = format_timestamp(received_at);

    let records = push
        .commits
        .iter()
        .map(|commit| {
            NewEvent::push(
                commit.id.clone().unwrap_or_default(),
                author,
                to_branch,
                commit.timestamp.clone().unwrap_or_else(|| fallback.clone()),
            )
        })
        .collect();

    Ok(Classification::Record(records))
}

/// One PULL_REQUEST or MERGE record, or nothing
fn classify_pull_request(
    payload: &Value,
    received_at: DateTime<Utc>,
) -> ServiceResult<Classification> {
    ensure_object(payload)?;
    let delivery: PullRequestDelivery = read(payload)?;

    let (Some(action), Some(pull_request)) = (
        delivery.action.filter(is_truthy),
        delivery.pull_request.filter(is_truthy),
    ) else {
        return Ok(Classification::Ignore(IgnoreReason::MissingPullRequest));
    };

    let details: PullRequestDetails = read(&pull_request)?;
    let action = match &action {
        Value::String(name) => PullRequestAction::from(name.as_str()),
        other => PullRequestAction::Other(other.to_string()),
    };

    let Some(stored) = action.stored_action(details.is_merged()) else {
        return Ok(Classification::Ignore(
            IgnoreReason::IrrelevantPullRequestAction(action.as_str().to_string()),
        ));
    };

    Ok(Classification::Record(vec![NewEvent::pull_request(
        stored,
        details.request_id(),
        details.author(),
        details.from_branch(),
        details.to_branch(),
        format_timestamp(received_at),
    )]))
}
