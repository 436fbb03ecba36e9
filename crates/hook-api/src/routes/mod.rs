//! Route definitions
//!
//! The welcome page at `/` and the webhook routes under `/webhook`.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers::{dashboard, health, receiver, root};
use crate::state::AppState;

/// Largest delivery GitHub sends (25 MB)
pub const MAX_PAYLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Create the main router with all routes (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::welcome))
        .merge(webhook_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Webhook receiver and dashboard routes
///
/// The table is reachable both with and without the trailing slash.
fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/webhook", get(dashboard::event_table))
        .route("/webhook/", get(dashboard::event_table))
        .route("/webhook/events", get(dashboard::recent_events))
        .route("/webhook/ui", get(dashboard::live_dashboard))
        .route(
            "/webhook/receiver",
            post(receiver::receive).layer(DefaultBodyLimit::max(MAX_PAYLOAD_BYTES)),
        )
}
