//! Note service

use sqlx::PgPool;

use crate::{
    db::repositories::{EventRepository, NoteRepository, TeamRepository},
    error::{AppError, AppResult},
    handlers::notes::{
        request::{NoteQuery, SetNoteRequest},
        response::{NoteResponse, SetNoteResponse},
    },
    services::EventService,
};

/// Note service for business logic
pub struct NoteService;

impl NoteService {
    /// Get the note a judge keeps about a team, empty if none exists
    pub async fn get_note(pool: &PgPool, query: NoteQuery) -> AppResult<NoteResponse> {
        let event = EventRepository::find_by_pin(pool, &query.event)
            .await?
            .ok_or_else(|| AppError::NotFound("Wrong Event Name, ask for help".to_string()))?;

        let team = TeamRepository::find_by_name(pool, &event.id, &query.team)
            .await?
            .ok_or_else(|| AppError::NotFound("Wrong Team Name, ask for help".to_string()))?;

        let notes = NoteRepository::find(pool, &team.id, &event.id, &query.judge)
            .await?
            .map(|n| n.text)
            .unwrap_or_default();

        Ok(NoteResponse {
            success: "team/event/judge combination found".to_string(),
            team: team.name,
            event: event.name,
            notes,
        })
    }

    /// Create or replace a judge's note about a team
    pub async fn set_note(pool: &PgPool, payload: SetNoteRequest) -> AppResult<SetNoteResponse> {
        let event = EventService::resolve_event(pool, &payload.event)
            .await?
            .ok_or_else(|| AppError::NotFound("Wrong Event Name, ask for help".to_string()))?;

        let team = TeamRepository::find_by_name(pool, &event.id, &payload.team)
            .await?
            .ok_or_else(|| AppError::NotFound("Wrong Team Name, ask for help".to_string()))?;

        NoteRepository::upsert(pool, &team.id, &event.id, &payload.judge_name, &payload.text)
            .await?;

        Ok(SetNoteResponse {
            success: "new note created".to_string(),
        })
    }
}
