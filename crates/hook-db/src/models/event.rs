//! Event database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: Uuid,
    pub request_id: String,
    pub author: String,
    pub action: String,
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: String,
}

