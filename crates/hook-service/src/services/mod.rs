//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and orchestrate domain operations
//! against the injected event store.

pub mod context;
pub mod error;
pub mod event;
pub mod webhook;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use event::{EventService, RECENT_EVENT_LIMIT};
pub use webhook::{IngestOutcome, WebhookService};
