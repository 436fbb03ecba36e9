//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hook_common::ErrorResponse;
use hook_service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Body of a successful receiver call
pub const RECEIVED_MESSAGE: &str = "Receiver Work Successfully";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Invalid content type or empty payload.")]
    InvalidContentType,

    #[error("No JSON payload received.")]
    EmptyPayload,

    /// The body could not be read, e.g. it exceeds the size limit
    #[error("{}", .0.body_text())]
    UnreadableBody(#[from] BytesRejection),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::InvalidContentType | Self::EmptyPayload => StatusCode::BAD_REQUEST,
            Self::UnreadableBody(e) => e.status(),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::InvalidContentType => "INVALID_CONTENT_TYPE",
            Self::EmptyPayload => "EMPTY_PAYLOAD",
            Self::UnreadableBody(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
            Self::UnreadableBody(_) => "UNREADABLE_BODY",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(self.error_code(), self.to_string());

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Plain-text acknowledgement (200) for a delivery that was recorded
pub struct Received;

impl IntoResponse for Received {
    fn into_response(self) -> Response {
        (StatusCode::OK, RECEIVED_MESSAGE).into_response()
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
