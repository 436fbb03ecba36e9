//! Value objects - immutable types that represent domain concepts

mod event_id;

pub use event_id::{EventId, EventIdParseError};
