//! Service context - dependency container for services
//!
//! Holds the event store handle. Built once at startup and shared by every
//! request through the application state.

use std::sync::Arc;

use hook_core::traits::EventRepository;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    event_repo: Arc<dyn EventRepository>,
}

impl ServiceContext {
    /// Create a new service context around an event store
    pub fn new(event_repo: Arc<dyn EventRepository>) -> Self {
        Self { event_repo }
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("event_repo", &"dyn EventRepository")
            .finish()
    }
}
