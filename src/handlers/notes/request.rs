//! Note request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_JUDGE_NAME_LENGTH, MAX_NOTE_TEXT_LENGTH, MAX_TEAM_NAME_LENGTH};
use crate::utils::validate_not_blank;

/// Query parameters for fetching a judge's note about a team
///
/// `event` is the event pin.
#[derive(Debug, Deserialize)]
pub struct NoteQuery {
    pub event: String,
    pub team: String,
    pub judge: String,
}

/// Create or replace a judge's note about a team
///
/// `event` accepts the event pin, or an event name for older clients.
#[derive(Debug, Deserialize, Validate)]
pub struct SetNoteRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "No event name entered"))]
    pub event: String,

    #[serde(default)]
    #[validate(
        length(max = MAX_TEAM_NAME_LENGTH),
        custom(function = "validate_not_blank", message = "No team entered")
    )]
    pub team: String,

    #[serde(default)]
    #[validate(
        length(max = MAX_JUDGE_NAME_LENGTH),
        custom(function = "validate_not_blank", message = "No judge entered")
    )]
    pub judge_name: String,

    #[serde(default)]
    #[validate(
        length(max = MAX_NOTE_TEXT_LENGTH),
        custom(function = "validate_not_blank", message = "No note text entered")
    )]
    pub text: String,
}
