//! Event request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_CRITERIA_LIST_LENGTH, MAX_EVENT_DATE_LENGTH, MAX_EVENT_NAME_LENGTH,
    MAX_JUDGE_LIST_LENGTH, MAX_TEAM_LIST_LENGTH,
};
use crate::utils::validate_not_blank;

/// Create event request
///
/// Teams, judges and criteria arrive as newline-separated blocks, one entry
/// per line, the way the organizer form submits them. A field left out of
/// the body reads as blank; a blank name, teams, judges or criteria is
/// rejected, while a blank date or organizer is stored as given.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[serde(default)]
    #[validate(
        length(max = MAX_EVENT_NAME_LENGTH),
        custom(function = "validate_not_blank", message = "No name entered")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = MAX_EVENT_DATE_LENGTH))]
    pub date: String,

    /// Newline-separated team names
    #[serde(default)]
    #[validate(
        length(max = MAX_TEAM_LIST_LENGTH),
        custom(function = "validate_not_blank", message = "No teams entered")
    )]
    pub teams: String,

    /// Newline-separated judge names
    #[serde(default)]
    #[validate(
        length(max = MAX_JUDGE_LIST_LENGTH),
        custom(function = "validate_not_blank", message = "No judges entered")
    )]
    pub judges: String,

    /// Newline-separated judging criteria
    #[serde(default)]
    #[validate(
        length(max = MAX_CRITERIA_LIST_LENGTH),
        custom(function = "validate_not_blank", message = "No criteria entered")
    )]
    pub criteria: String,

    #[serde(default)]
    #[validate(length(max = MAX_EVENT_NAME_LENGTH))]
    pub organizer: String,
}

/// Query parameters for listing an organizer's events
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    pub organizer: Option<String>,
}
