//! Note handler implementations

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{error::AppResult, services::NoteService, state::AppState};

use super::{
    request::{NoteQuery, SetNoteRequest},
    response::{NoteResponse, SetNoteResponse},
};

/// Get the note a judge keeps about a team
pub async fn get_note(
    State(state): State<AppState>,
    Query(query): Query<NoteQuery>,
) -> AppResult<Json<NoteResponse>> {
    let response = NoteService::get_note(state.db(), query).await?;

    Ok(Json(response))
}

/// Create or replace a judge's note about a team
pub async fn set_note(
    State(state): State<AppState>,
    Json(payload): Json<SetNoteRequest>,
) -> AppResult<(StatusCode, Json<SetNoteResponse>)> {
    payload.validate()?;

    let response = NoteService::set_note(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
