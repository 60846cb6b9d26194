//! Judging response DTOs

use serde::Serialize;

/// Outcome of asking for the next pair
///
/// Serializes flat: either `{"success": ..., "team1": ..., "team2": ...,
/// "notes": ...}` or `{"finished": <team>}`. Judge screens branch on which
/// key is present.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PairResponse {
    /// Two teams to compare next, oriented viewing team first
    Pair {
        success: String,
        team1: String,
        team2: String,
        /// The judge's existing note about team1, empty if none
        notes: String,
    },
    /// Nothing left to compare from the team this judge is viewing
    Finished { finished: String },
}

impl PairResponse {
    pub fn pair(team1: String, team2: String, notes: String) -> Self {
        Self::Pair {
            success: "teams found".to_string(),
            team1,
            team2,
            notes,
        }
    }

    pub fn finished(team: String) -> Self {
        Self::Finished { finished: team }
    }
}

/// Vote acknowledgement
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub success: String,
}
