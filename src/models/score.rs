//! Score model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Accumulated score for a team within an event
///
/// Seeded at zero when the event is created and incremented by each vote's
/// winner score. One row per (team, event).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub team_id: Uuid,
    pub event_id: Uuid,
    pub score: Decimal,
}
