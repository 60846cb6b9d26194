//! Result service

use sqlx::PgPool;

use crate::{
    error::AppResult,
    handlers::results::response::{ResultsResponse, ScoreboardEntry},
};

/// Result service for business logic
pub struct ResultService;

impl ResultService {
    /// Scoreboard for an event, highest score first
    ///
    /// An unknown pin yields an empty board rather than an error; spectator
    /// screens poll this endpoint freely.
    pub async fn get_results(pool: &PgPool, pin: &str) -> AppResult<ResultsResponse> {
        let results = sqlx::query_as::<_, ScoreboardEntry>(
            r#"
            SELECT t.name AS team_name, s.team_id, e.name AS event_name, s.event_id, s.score
            FROM scores s
            JOIN teams t ON t.id = s.team_id
            JOIN events e ON e.id = s.event_id
            WHERE e.pin = $1
            ORDER BY s.score DESC, t.position
            "#,
        )
        .bind(pin)
        .fetch_all(pool)
        .await?;

        Ok(ResultsResponse { results })
    }
}
