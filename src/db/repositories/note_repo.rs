//! Note repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Note};

/// Repository for judge notes
pub struct NoteRepository;

impl NoteRepository {
    /// Find the note a judge keeps about a team
    pub async fn find(
        pool: &PgPool,
        team_id: &Uuid,
        event_id: &Uuid,
        judge_name: &str,
    ) -> AppResult<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT * FROM notes
            WHERE team_id = $1 AND event_id = $2 AND judge_name = $3
            "#,
        )
        .bind(team_id)
        .bind(event_id)
        .bind(judge_name)
        .fetch_optional(pool)
        .await?;

        Ok(note)
    }

    /// Create or replace a judge's note about a team
    pub async fn upsert(
        pool: &PgPool,
        team_id: &Uuid,
        event_id: &Uuid,
        judge_name: &str,
        text: &str,
    ) -> AppResult<Note> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (team_id, event_id, judge_name, text)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (team_id, event_id, judge_name)
            DO UPDATE SET text = EXCLUDED.text
            RETURNING *
            "#,
        )
        .bind(team_id)
        .bind(event_id)
        .bind(judge_name)
        .bind(text)
        .fetch_one(pool)
        .await?;

        Ok(note)
    }
}
