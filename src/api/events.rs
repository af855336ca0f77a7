//! Event API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, Utc};
use serde::Serialize;

use super::{success, ApiResult};
use crate::models::{CreateEventRequest, EventFilter, EventQueryParams, PaceBand, Participation};
use crate::roster::EventView;
use crate::AppState;

/// Filtered roster view.
#[derive(Debug, Serialize)]
pub struct EventList {
    pub events: Vec<EventView>,
    pub total: usize,
}

/// Result of a join/leave toggle.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub event: EventView,
    pub outcome: Participation,
}

/// GET /api/events - List upcoming events matching the query.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventQueryParams>,
) -> ApiResult<EventList> {
    let filter = EventFilter::try_from(&params)?;
    let now = params
        .reference_time()?
        .unwrap_or_else(|| Local::now().naive_local());

    let session = state.session.lock().await;
    let events = session.list(&filter, now);
    let total = events.len();

    success(EventList { events, total })
}

/// GET /api/events/:id - Get a single event.
pub async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<EventView> {
    let session = state.session.lock().await;
    success(session.get(&id)?)
}

/// POST /api/events - Create a new event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<EventView> {
    let mut session = state.session.lock().await;
    success(session.create(&request, Utc::now()).await?)
}

/// POST /api/events/:id/toggle - Join or leave as the current viewer.
pub async fn toggle_participation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ToggleResponse> {
    let mut session = state.session.lock().await;
    let (event, outcome) = session.toggle(&id, Utc::now()).await?;
    success(ToggleResponse { event, outcome })
}

/// GET /api/paces - The selectable pace bands.
pub async fn list_paces() -> ApiResult<Vec<&'static str>> {
    success(PaceBand::ALL.iter().map(PaceBand::as_str).collect())
}
