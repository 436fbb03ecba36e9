//! # hook-service
//!
//! Application layer: classifies webhook deliveries into event records,
//! stores them, and serves the recent history.

pub mod dto;
pub mod services;

pub use dto::{
    EventResponse, HealthResponse, PullRequestDelivery, PullRequestDetails, PushCommit,
    PushPayload, ReadinessResponse,
};
pub use services::{
    EventService, IngestOutcome, ServiceContext, ServiceError, ServiceResult, WebhookService,
    RECENT_EVENT_LIMIT,
};
