//! Team repository

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{error::AppResult, models::Team};

/// Repository for team database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Create a new team within an event
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        event_id: &Uuid,
        name: &str,
        position: i32,
    ) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (event_id, name, position)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(name)
        .bind(position)
        .fetch_one(&mut **tx)
        .await?;

        Ok(team)
    }

    /// List all teams for an event in creation order
    pub async fn list_for_event(pool: &PgPool, event_id: &Uuid) -> AppResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT * FROM teams
            WHERE event_id = $1
            ORDER BY position
            "#,
        )
        .bind(event_id)
        .fetch_all(pool)
        .await?;

        Ok(teams)
    }

    /// Find a team by name within an event
    pub async fn find_by_name(
        pool: &PgPool,
        event_id: &Uuid,
        name: &str,
    ) -> AppResult<Option<Team>> {
        let team =
            sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE event_id = $1 AND name = $2"#)
                .bind(event_id)
                .bind(name)
                .fetch_optional(pool)
                .await?;

        Ok(team)
    }
}
