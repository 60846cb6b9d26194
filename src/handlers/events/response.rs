//! Event response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Create event response
///
/// The pin is the key organizers hand out to judges and spectators.
#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub success: String,
    pub pin: String,
}

/// Full event detail including its team names
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    pub pin: String,
    pub judges: Vec<String>,
    pub criteria: Vec<String>,
    pub organizer: String,
    pub teams: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Event summary for organizer listings
#[derive(Debug, Serialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    pub pin: String,
    pub organizer: String,
    pub created_at: DateTime<Utc>,
}

/// An organizer's events, newest first
#[derive(Debug, Serialize)]
pub struct EventsListResponse {
    pub events: Vec<EventSummary>,
}
