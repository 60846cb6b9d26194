//! Event handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::EventService,
    state::AppState,
};

use super::{
    request::{CreateEventRequest, ListEventsQuery},
    response::{CreateEventResponse, EventResponse, EventsListResponse},
};

/// Create a new event
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<CreateEventResponse>)> {
    // Validate request
    payload.validate()?;

    let response = EventService::create_event(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get an event by pin
pub async fn get_event(
    State(state): State<AppState>,
    Path(pin): Path<String>,
) -> AppResult<Json<EventResponse>> {
    let response = EventService::get_event(state.db(), &pin).await?;

    Ok(Json(response))
}

/// List the events an organizer has created
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> AppResult<Json<EventsListResponse>> {
    let organizer = query
        .organizer
        .as_deref()
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .ok_or_else(|| AppError::Validation("No organizer entered".to_string()))?;

    let response = EventService::list_events(state.db(), organizer).await?;

    Ok(Json(response))
}

/// Delete an event and everything recorded under it
pub async fn delete_event(
    State(state): State<AppState>,
    Path(pin): Path<String>,
) -> AppResult<StatusCode> {
    EventService::delete_event(state.db(), state.judging(), &pin).await?;

    Ok(StatusCode::NO_CONTENT)
}
