//! Results response DTOs

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// One team's accumulated score on the scoreboard
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ScoreboardEntry {
    pub team_name: String,
    pub team_id: Uuid,
    pub event_name: String,
    pub event_id: Uuid,
    pub score: Decimal,
}

/// Scoreboard for an event, highest score first
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<ScoreboardEntry>,
}
