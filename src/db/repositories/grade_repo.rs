//! Grade repository

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{error::AppResult, models::Grade};

/// Repository for the append-only grade ledger
pub struct GradeRepository;

impl GradeRepository {
    /// Append a judged comparison
    ///
    /// Teams are stored in the orientation the vote arrived in; lookups treat
    /// both orientations as the same pair.
    pub async fn append(
        tx: &mut Transaction<'_, Postgres>,
        event_id: &Uuid,
        team_one_id: &Uuid,
        team_two_id: &Uuid,
        criteria: &str,
        judge_name: &str,
    ) -> AppResult<Grade> {
        let grade = sqlx::query_as::<_, Grade>(
            r#"
            INSERT INTO grades (event_id, team_one_id, team_two_id, criteria, judge_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(team_one_id)
        .bind(team_two_id)
        .bind(criteria)
        .bind(judge_name)
        .fetch_one(&mut **tx)
        .await?;

        Ok(grade)
    }

    /// List every grade one judge has recorded for one criteria of an event
    ///
    /// This is the scheduler's working set; it is loaded once per judging
    /// session and kept current in memory afterwards.
    pub async fn list_for_judge(
        pool: &PgPool,
        event_id: &Uuid,
        criteria: &str,
        judge_name: &str,
    ) -> AppResult<Vec<Grade>> {
        let grades = sqlx::query_as::<_, Grade>(
            r#"
            SELECT * FROM grades
            WHERE event_id = $1 AND criteria = $2 AND judge_name = $3
            "#,
        )
        .bind(event_id)
        .bind(criteria)
        .bind(judge_name)
        .fetch_all(pool)
        .await?;

        Ok(grades)
    }
}
