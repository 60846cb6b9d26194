//! Note response DTOs

use serde::Serialize;

/// A judge's note about a team
///
/// `notes` is empty when the judge has not written one yet.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub success: String,
    pub team: String,
    pub event: String,
    pub notes: String,
}

/// Note write acknowledgement
#[derive(Debug, Serialize)]
pub struct SetNoteResponse {
    pub success: String,
}
