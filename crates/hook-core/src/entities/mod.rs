//! Domain entities

mod event;

pub use event::{format_timestamp, Event, EventAction, EventActionParseError, NewEvent};
