//! Error handling utilities for repositories

use hook_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Error returned when the store cannot be reached
pub fn store_unavailable() -> DomainError {
    DomainError::DatabaseError("event store unavailable".to_string())
}
