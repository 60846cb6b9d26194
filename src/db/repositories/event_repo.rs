//! Event repository

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{error::AppResult, models::Event};

/// Repository for event database operations
pub struct EventRepository;

impl EventRepository {
    /// Create a new event
    ///
    /// Runs inside the caller's transaction so the event and its teams are
    /// committed together.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        date: &str,
        pin: &str,
        judges: &[String],
        criteria: &[String],
        organizer: &str,
    ) -> AppResult<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, date, pin, judges, criteria, organizer)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(date)
        .bind(pin)
        .bind(judges)
        .bind(criteria)
        .bind(organizer)
        .fetch_one(&mut **tx)
        .await?;

        Ok(event)
    }

    /// Find event by pin
    pub async fn find_by_pin(pool: &PgPool, pin: &str) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE pin = $1"#)
            .bind(pin)
            .fetch_optional(pool)
            .await?;

        Ok(event)
    }

    /// Find event by name
    ///
    /// Event names are not unique; when several events share a name the most
    /// recently created one wins. Callers that can should look up by pin.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT * FROM events
            WHERE name = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(event)
    }

    /// List events created by an organizer, newest first
    pub async fn list_by_organizer(pool: &PgPool, organizer: &str) -> AppResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT * FROM events
            WHERE organizer = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(organizer)
        .fetch_all(pool)
        .await?;

        Ok(events)
    }

    /// Delete an event
    ///
    /// Teams, scores, grades and notes go with it via cascading foreign keys.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM events WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
