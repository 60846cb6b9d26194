//! Team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Team database model
///
/// `position` preserves the order teams were listed at event creation, which
/// is the order the scheduler walks candidate pairs in.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub members: Vec<String>,
    pub photo_url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
