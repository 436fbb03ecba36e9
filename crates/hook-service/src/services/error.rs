//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use hook_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain or storage failure
    Domain(DomainError),

    /// Well-formed JSON whose shape the receiver cannot read
    UnexpectedPayload(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::UnexpectedPayload(msg) => write!(f, "Unexpected payload shape: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::UnexpectedPayload(_) => None,
        }
    }
}

impl ServiceError {
    /// Create an unexpected payload error
    pub fn unexpected_payload(msg: impl Into<String>) -> Self {
        Self::UnexpectedPayload(msg.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// Everything that reaches the service layer is an internal failure;
    /// malformed requests are rejected before classification.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(_) | Self::UnexpectedPayload(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::UnexpectedPayload(_) => "UNEXPECTED_PAYLOAD",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
