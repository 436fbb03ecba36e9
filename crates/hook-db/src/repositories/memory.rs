//! In-memory implementation of EventRepository
//!
//! Backs router tests and database-free local runs. Can be told to start
//! failing so storage outages are reproducible without a real database.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use hook_core::traits::{EventRepository, RepoResult};
use hook_core::{Event, EventId, NewEvent};

use super::error::store_unavailable;

#[derive(Debug, Default)]
struct Inner {
    events: Vec<Event>,
    /// Appends accepted before the store starts failing
    append_budget: Option<usize>,
    offline: bool,
}

/// Event store kept in process memory
#[derive(Debug, Default)]
pub struct MemoryEventRepository {
    inner: RwLock<Inner>,
}

impl MemoryEventRepository {
    /// Create an empty, healthy store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails as if the database were down
    pub fn unavailable() -> Self {
        let repo = Self::new();
        repo.inner.write().offline = true;
        repo
    }

    /// A store that accepts `appends` more records, then fails every append
    pub fn failing_after(appends: usize) -> Self {
        let repo = Self::new();
        repo.inner.write().append_budget = Some(appends);
        repo
    }

    /// Every stored record, in insertion order
    pub fn all(&self) -> Vec<Event> {
        self.inner.read().events.clone()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.inner.read().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().events.is_empty()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    #[instrument(skip(self, event), fields(action = %event.action))]
    async fn append(&self, event: &NewEvent) -> RepoResult<EventId> {
        let mut inner = self.inner.write();
        if inner.offline {
            return Err(store_unavailable());
        }
        if let Some(budget) = inner.append_budget.as_mut() {
            if *budget == 0 {
                return Err(store_unavailable());
            }
            *budget -= 1;
        }

        let id = EventId::generate();
        inner.events.push(event.clone().into_event(id));
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: usize) -> RepoResult<Vec<Event>> {
        let inner = self.inner.read();
        if inner.offline {
            return Err(store_unavailable());
        }

        let mut events = inner.events.clone();
        // Stable sort: equal timestamps keep insertion order
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        events.truncate(limit);
        Ok(events)
    }

    async fn health_check(&self) -> RepoResult<()> {
        if self.inner.read().offline {
            return Err(store_unavailable());
        }
        Ok(())
    }
}
