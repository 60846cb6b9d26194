//! Score repository

use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{error::AppResult, models::ScoreRecord};

/// Repository for accumulated team scores
pub struct ScoreRepository;

impl ScoreRepository {
    /// Seed a zero score for a freshly created team
    pub async fn create_zero(
        tx: &mut Transaction<'_, Postgres>,
        team_id: &Uuid,
        event_id: &Uuid,
    ) -> AppResult<ScoreRecord> {
        let record = sqlx::query_as::<_, ScoreRecord>(
            r#"
            INSERT INTO scores (team_id, event_id, score)
            VALUES ($1, $2, 0)
            RETURNING *
            "#,
        )
        .bind(team_id)
        .bind(event_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(record)
    }

    /// Add a vote's winner score to a team's total
    ///
    /// The increment happens in SQL so concurrent votes for the same team
    /// never lose updates. Inserts the row if the seed is somehow missing.
    pub async fn add_score(
        tx: &mut Transaction<'_, Postgres>,
        team_id: &Uuid,
        event_id: &Uuid,
        delta: Decimal,
    ) -> AppResult<ScoreRecord> {
        let record = sqlx::query_as::<_, ScoreRecord>(
            r#"
            INSERT INTO scores (team_id, event_id, score)
            VALUES ($1, $2, $3)
            ON CONFLICT (team_id, event_id)
            DO UPDATE SET score = scores.score + EXCLUDED.score
            RETURNING *
            "#,
        )
        .bind(team_id)
        .bind(event_id)
        .bind(delta)
        .fetch_one(&mut **tx)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;
    use sqlx::PgPool;

    use super::*;
    use crate::db::repositories::{EventRepository, TeamRepository};

    /// Pool against the database named by DATABASE_URL; None skips the test
    /// when no database is configured.
    async fn test_pool() -> Option<PgPool> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("connect to test database");
        crate::db::run_migrations(&pool).await.expect("run migrations");
        Some(pool)
    }

    #[tokio::test]
    async fn test_add_score_accumulates_across_votes() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let mut tx = pool.begin().await.unwrap();

        let event = EventRepository::create(
            &mut tx,
            "Demo Day",
            "June 5",
            &Uuid::new_v4().to_string(),
            &["Ada".to_string()],
            &["Design".to_string()],
            "Hack Club",
        )
        .await
        .unwrap();
        let team = TeamRepository::create(&mut tx, &event.id, "Alpha", 0).await.unwrap();

        let seeded = ScoreRepository::create_zero(&mut tx, &team.id, &event.id)
            .await
            .unwrap();
        assert_eq!(seeded.score, Decimal::ZERO);

        ScoreRepository::add_score(&mut tx, &team.id, &event.id, Decimal::new(3, 0))
            .await
            .unwrap();
        ScoreRepository::add_score(&mut tx, &team.id, &event.id, Decimal::new(15, 1))
            .await
            .unwrap();
        let total = ScoreRepository::add_score(&mut tx, &team.id, &event.id, Decimal::new(25, 2))
            .await
            .unwrap();
        assert_eq!(total.score, Decimal::new(475, 2));

        // never committed; the rows vanish with the transaction
    }
}
