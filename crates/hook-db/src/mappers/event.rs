//! Event entity <-> model mapper

use std::borrow::Cow;

use hook_core::{DomainError, Event, EventAction, EventId, NewEvent};

use crate::models::EventModel;

/// Convert EventModel to Event entity
///
/// Fails if the row carries an action outside the known set.
impl TryFrom<EventModel> for Event {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        let action = model
            .action
            .parse::<EventAction>()
            .map_err(|e| DomainError::UnknownAction(e.0))?;

        Ok(Event {
            id: EventId::new(model.id),
            request_id: model.request_id,
            author: model.author,
            action,
            from_branch: model.from_branch,
            to_branch: model.to_branch,
            timestamp: model.timestamp,
        })
    }
}

/// Column values for inserting a NewEvent
///
/// PostgreSQL `text` cannot hold U+0000, so NUL characters are dropped.
/// Values without one stay borrowed.
pub struct EventInsert<'a> {
    pub request_id: Cow<'a, str>,
    pub author: Cow<'a, str>,
    pub action: &'static str,
    pub from_branch: Option<Cow<'a, str>>,
    pub to_branch: Cow<'a, str>,
    pub timestamp: Cow<'a, str>,
}

impl<'a> EventInsert<'a> {
    pub fn new(event: &'a NewEvent) -> Self {
        Self {
            request_id: strip_nul(&event.request_id),
            author: strip_nul(&event.author),
            action: event.action.as_str(),
            from_branch: event.from_branch.as_deref().map(strip_nul),
            to_branch: strip_nul(&event.to_branch),
            timestamp: strip_nul(&event.timestamp),
        }
    }
}

fn strip_nul(value: &str) -> Cow<'_, str> {
    if value.contains('\0') {
        Cow::Owned(value.replace('\0', ""))
    } else {
        Cow::Borrowed(value)
    }
}
