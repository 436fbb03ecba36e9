//! # hook-db
//!
//! Storage layer implementing [`hook_core::EventRepository`].
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap for PostgreSQL
//! - Row models with SQLx `FromRow` derives and row ↔ entity mappers
//! - `PgEventRepository` for production
//! - `MemoryEventRepository` for tests and local runs without a database
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hook_db::{create_pool, ensure_schema, DatabaseConfig, PgEventRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!     let events = PgEventRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{MemoryEventRepository, PgEventRepository};
