//! Schema bootstrap
//!
//! The schema script is idempotent and applied on every startup.

use sqlx::PgPool;
use tracing::info;

/// DDL for the `events` table and its timestamp index
pub const EVENTS_SCHEMA: &str = include_str!("../../migrations/0001_create_events.sql");

/// Create the `events` table and index if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(EVENTS_SCHEMA).execute(pool).await?;
    info!("Event store schema ready");
    Ok(())
}
