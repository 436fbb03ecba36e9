//! Event query service
//!
//! Read side of the store: the dashboard, the JSON feed and the readiness probe.

use tracing::instrument;

use crate::dto::EventResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// How many records the dashboard and the JSON feed show
pub const RECENT_EVENT_LIMIT: usize = 10;

/// Event query service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The newest `limit` records, by timestamp string descending
    #[instrument(skip(self))]
    pub async fn recent(&self, limit: usize) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().recent(limit).await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    /// Whether the store answers
    #[instrument(skip(self))]
    pub async fn store_healthy(&self) -> bool {
        match self.ctx.event_repo().health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Event store health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hook_core::traits::EventRepository;
    use hook_core::NewEvent;
    use hook_db::MemoryEventRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_recent_is_capped_and_sorted() {
        let repo = Arc::new(MemoryEventRepository::new());
        for day in 1..=12 {
            repo.append(&NewEvent::push(
                format!("c{day}"),
                "alice",
                "main",
                format!("2024-01-{day:02}T00:00:00Z"),
            ))
            .await
            .unwrap();
        }
        let ctx = ServiceContext::new(repo);

        let events = EventService::new(&ctx).recent(RECENT_EVENT_LIMIT).await.unwrap();
        assert_eq!(events.len(), 10);
        assert_eq!(events[0].request_id, "c12");
        assert_eq!(events[9].request_id, "c3");
    }

    #[tokio::test]
    async fn test_recent_empty_store() {
        let ctx = ServiceContext::new(Arc::new(MemoryEventRepository::new()));
        let events = EventService::new(&ctx).recent(RECENT_EVENT_LIMIT).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_recent_store_down() {
        let ctx = ServiceContext::new(Arc::new(MemoryEventRepository::unavailable()));
        let err = EventService::new(&ctx).recent(RECENT_EVENT_LIMIT).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_store_healthy() {
        let ctx = ServiceContext::new(Arc::new(MemoryEventRepository::new()));
        assert!(EventService::new(&ctx).store_healthy().await);

        let ctx = ServiceContext::new(Arc::new(MemoryEventRepository::unavailable()));
        assert!(!EventService::new(&ctx).store_healthy().await);
    }
}
