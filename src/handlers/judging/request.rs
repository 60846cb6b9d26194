//! Judging request DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_CRITERIA_LENGTH, MAX_JUDGE_NAME_LENGTH, MAX_TEAM_NAME_LENGTH};
use crate::utils::{validate_not_blank, validate_score};

/// Query parameters for the next pair to judge
///
/// `event` is the event pin. `team` is the team the judge is currently
/// standing at; the returned pair is oriented around it.
#[derive(Debug, Deserialize)]
pub struct NextPairQuery {
    pub event: String,
    pub criteria: String,
    pub judge: String,
    pub team: String,
}

/// Record a judged comparison
///
/// `event` accepts the event pin, or an event name for older clients.
/// The winner does not have to be one of the two compared teams; aggregate
/// scoring styles award the points wherever the judge says. String fields
/// left out of the body read as blank and fail validation with that
/// field's message.
#[derive(Debug, Deserialize, Validate)]
pub struct VoteRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "No event entered"))]
    pub event: String,

    #[serde(default)]
    #[validate(
        length(max = MAX_TEAM_NAME_LENGTH),
        custom(function = "validate_not_blank", message = "No team one entered")
    )]
    pub team_one: String,

    #[serde(default)]
    #[validate(
        length(max = MAX_TEAM_NAME_LENGTH),
        custom(function = "validate_not_blank", message = "No team two entered")
    )]
    pub team_two: String,

    #[serde(default)]
    #[validate(
        length(max = MAX_CRITERIA_LENGTH),
        custom(function = "validate_not_blank", message = "No criteria entered")
    )]
    pub criteria: String,

    #[serde(default)]
    #[validate(
        length(max = MAX_JUDGE_NAME_LENGTH),
        custom(function = "validate_not_blank", message = "No judge name entered")
    )]
    pub judge_name: String,

    #[serde(default)]
    #[validate(
        length(max = MAX_TEAM_NAME_LENGTH),
        custom(function = "validate_not_blank", message = "No winner entered")
    )]
    pub winner: String,

    #[validate(custom(function = "validate_score", message = "Winner score cannot be negative"))]
    pub winner_score: Decimal,
}
