//! Judging service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::repositories::{GradeRepository, NoteRepository, ScoreRepository, TeamRepository},
    error::{AppError, AppResult},
    handlers::judging::{
        request::{NextPairQuery, VoteRequest},
        response::{PairResponse, VoteResponse},
    },
    models::Team,
    pairing::{next_unjudged_pair, JudgedSet, JudgingCoordinator},
    services::EventService,
};

/// Judging service for business logic
pub struct JudgingService;

impl JudgingService {
    /// Pick the next pair for a judge, or report them finished
    ///
    /// Holds the judge's session lock for the whole request, so a judge
    /// refreshing their screen sees a stable answer even mid-vote.
    pub async fn next_pair(
        pool: &PgPool,
        judging: &JudgingCoordinator,
        query: NextPairQuery,
    ) -> AppResult<PairResponse> {
        let event = EventService::find_by_pin(pool, &query.event).await?;

        let session = judging.session(event.id, &query.judge).await;
        let mut session = session.lock().await;

        if !session.is_loaded(&query.criteria) {
            let grades =
                GradeRepository::list_for_judge(pool, &event.id, &query.criteria, &query.judge)
                    .await?;
            let set =
                JudgedSet::from_pairs(grades.into_iter().map(|g| (g.team_one_id, g.team_two_id)));
            session.install(&query.criteria, set);
        }

        let teams = TeamRepository::list_for_event(pool, &event.id).await?;

        match next_unjudged_pair(&teams, session.judged(&query.criteria), &query.team) {
            Some((team1, team2)) => {
                let notes = NoteRepository::find(pool, &team1.id, &event.id, &query.judge)
                    .await?
                    .map(|n| n.text)
                    .unwrap_or_default();

                Ok(PairResponse::pair(team1.name.clone(), team2.name.clone(), notes))
            }
            None => Ok(PairResponse::finished(query.team)),
        }
    }

    /// Record a judge's vote: append the grade and award the winner's score
    pub async fn record_vote(
        pool: &PgPool,
        judging: &JudgingCoordinator,
        payload: VoteRequest,
    ) -> AppResult<VoteResponse> {
        let event = EventService::resolve_event(pool, &payload.event)
            .await?
            .ok_or_else(|| AppError::NotFound("Event doesn't Exist".to_string()))?;

        let session = judging.session(event.id, &payload.judge_name).await;
        let mut session = session.lock().await;

        let team_one = Self::find_team(pool, &event.id, &payload.team_one).await?;
        let team_two = Self::find_team(pool, &event.id, &payload.team_two).await?;
        let winner = Self::find_team(pool, &event.id, &payload.winner).await?;

        // The grade and the score land together or not at all
        let mut tx = pool.begin().await?;
        GradeRepository::append(
            &mut tx,
            &event.id,
            &team_one.id,
            &team_two.id,
            &payload.criteria,
            &payload.judge_name,
        )
        .await?;
        let record =
            ScoreRepository::add_score(&mut tx, &winner.id, &event.id, payload.winner_score)
                .await?;
        tx.commit().await?;

        session.record(&payload.criteria, team_one.id, team_two.id);

        info!(
            event = %event.pin,
            judge = %payload.judge_name,
            criteria = %payload.criteria,
            winner = %winner.name,
            score = %record.score,
            "vote recorded"
        );

        Ok(VoteResponse {
            success: format!("new grade and score was added for {}", payload.team_one),
        })
    }

    async fn find_team(pool: &PgPool, event_id: &Uuid, name: &str) -> AppResult<Team> {
        TeamRepository::find_by_name(pool, event_id, name)
            .await?
            .ok_or_else(|| AppError::NotFound("Team doesn't Exist".to_string()))
    }
}
