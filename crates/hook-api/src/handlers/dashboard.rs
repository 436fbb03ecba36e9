//! Dashboard handlers
//!
//! Read-only views over the most recent events.

use axum::{extract::State, response::Html, Json};
use hook_service::{EventResponse, EventService, RECENT_EVENT_LIMIT};

use crate::response::ApiResult;
use crate::state::AppState;
use crate::views::{render_event_table, DASHBOARD_PAGE};

/// Table of the latest events
///
/// GET /webhook/
pub async fn event_table(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let service = EventService::new(state.service_context());
    let events = service.recent(RECENT_EVENT_LIMIT).await?;
    Ok(Html(render_event_table(&events)))
}

/// Latest events as JSON
///
/// GET /webhook/events
pub async fn recent_events(State(state): State<AppState>) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let events = service.recent(RECENT_EVENT_LIMIT).await?;
    Ok(Json(events))
}

/// Live dashboard page; polls `/webhook/events` from the browser
///
/// GET /webhook/ui
pub async fn live_dashboard() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}
