//! Results handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{error::AppResult, services::ResultService, state::AppState};

use super::{request::ResultsQuery, response::ResultsResponse};

/// Get an event's scoreboard
pub async fn get_results(
    State(state): State<AppState>,
    Query(query): Query<ResultsQuery>,
) -> AppResult<Json<ResultsResponse>> {
    let response = ResultService::get_results(state.db(), &query.event).await?;

    Ok(Json(response))
}
