//! Entity to model mappers
//!
//! - `TryFrom<EventModel> for Event`: convert database rows to domain objects
//! - `EventInsert`: prepare entity data for insertion

mod event;

pub use event::EventInsert;
