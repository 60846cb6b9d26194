//! Note model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Note database model
///
/// Free-text observations a judge keeps about a team. At most one note per
/// (team, event, judge); writes replace the previous text.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub team_id: Uuid,
    pub event_id: Uuid,
    pub judge_name: String,
    pub text: String,
}
