//! Grade model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Grade database model
///
/// One row per judged comparison: a judge looked at `team_one` and `team_two`
/// under a criteria and picked a winner. Rows are append-only; the pair is
/// considered judged in either orientation.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Grade {
    pub id: Uuid,
    pub event_id: Uuid,
    pub team_one_id: Uuid,
    pub team_two_id: Uuid,
    pub criteria: String,
    pub judge_name: String,
    pub created_at: DateTime<Utc>,
}
