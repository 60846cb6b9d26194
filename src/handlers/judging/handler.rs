//! Judging handler implementations

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::{error::AppResult, services::JudgingService, state::AppState};

use super::{
    request::{NextPairQuery, VoteRequest},
    response::{PairResponse, VoteResponse},
};

/// Get the next pair of teams for a judge to compare
pub async fn next_pair(
    State(state): State<AppState>,
    Query(query): Query<NextPairQuery>,
) -> AppResult<Json<PairResponse>> {
    let response = JudgingService::next_pair(state.db(), state.judging(), query).await?;

    Ok(Json(response))
}

/// Record a judge's vote on a pair
pub async fn record_vote(
    State(state): State<AppState>,
    Json(payload): Json<VoteRequest>,
) -> AppResult<Json<VoteResponse>> {
    payload.validate()?;

    let response = JudgingService::record_vote(state.db(), state.judging(), payload).await?;

    Ok(Json(response))
}
