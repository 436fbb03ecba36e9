//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Data Errors
    // =========================================================================
    #[error("Unknown event action in store: {0}")]
    UnknownAction(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownAction(_) => "UNKNOWN_ACTION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::UnknownAction("X".into()).code(), "UNKNOWN_ACTION");
        assert_eq!(DomainError::DatabaseError("down".into()).code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::DatabaseError("connection refused".into());
        assert_eq!(err.to_string(), "Database error: connection refused");
    }
}
