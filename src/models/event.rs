//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Event database model
///
/// An event is a single judging session. Teams, judges and criteria are
/// captured once at creation time; the pin is the public lookup key handed
/// out to judges and spectators.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    pub pin: String,
    pub judges: Vec<String>,
    pub criteria: Vec<String>,
    pub organizer: String,
    pub created_at: DateTime<Utc>,
}
