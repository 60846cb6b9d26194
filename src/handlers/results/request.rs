//! Results request DTOs

use serde::Deserialize;

/// Query parameters for an event's scoreboard
///
/// `event` is the event pin.
#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub event: String,
}
