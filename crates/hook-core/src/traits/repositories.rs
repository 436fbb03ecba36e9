//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Event, NewEvent};
use crate::error::DomainError;
use crate::value_objects::EventId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Repository
// ============================================================================

/// Append-only store of normalized event records
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist one record and return the identifier the store assigned
    ///
    /// No uniqueness is enforced; replays produce duplicate records.
    async fn append(&self, event: &NewEvent) -> RepoResult<EventId>;

    /// Up to `limit` records, newest `timestamp` first
    ///
    /// Timestamps are compared as raw strings, byte by byte.
    async fn recent(&self, limit: usize) -> RepoResult<Vec<Event>>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}
