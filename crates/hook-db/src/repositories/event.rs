//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use hook_core::traits::{EventRepository, RepoResult};
use hook_core::{Event, EventId, NewEvent};

use crate::mappers::EventInsert;
use crate::models::EventModel;

use super::error::map_db_error;

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self, event), fields(action = %event.action, request_id = %event.request_id))]
    async fn append(&self, event: &NewEvent) -> RepoResult<EventId> {
        let insert = EventInsert::new(event);

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO events (request_id, author, action, from_branch, to_branch, "timestamp")
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&*insert.request_id)
        .bind(&*insert.author)
        .bind(insert.action)
        .bind(insert.from_branch.as_deref())
        .bind(&*insert.to_branch)
        .bind(&*insert.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(EventId::new(id))
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: usize) -> RepoResult<Vec<Event>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        // COLLATE "C" keeps the ordering byte-wise regardless of database locale
        let rows = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, request_id, author, action, from_branch, to_branch, "timestamp"
            FROM events
            ORDER BY "timestamp" COLLATE "C" DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Event::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
