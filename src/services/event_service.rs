//! Event service

use sqlx::PgPool;
use tracing::info;

use crate::{
    db::repositories::{EventRepository, ScoreRepository, TeamRepository},
    error::{AppError, AppResult},
    handlers::events::{
        request::CreateEventRequest,
        response::{CreateEventResponse, EventResponse, EventSummary, EventsListResponse},
    },
    models::Event,
    pairing::JudgingCoordinator,
    utils::{generate_event_pin, parse_newline_list},
};

/// Event service for business logic
pub struct EventService;

impl EventService {
    /// Create a new event with its teams, judges and criteria
    ///
    /// The event, its teams and their zero scores are committed together.
    pub async fn create_event(
        pool: &PgPool,
        payload: CreateEventRequest,
    ) -> AppResult<CreateEventResponse> {
        let teams = parse_newline_list(&payload.teams);
        if teams.is_empty() {
            return Err(AppError::Validation("No teams entered".to_string()));
        }
        let judges = parse_newline_list(&payload.judges);
        if judges.is_empty() {
            return Err(AppError::Validation("No judges entered".to_string()));
        }
        let criteria = parse_newline_list(&payload.criteria);
        if criteria.is_empty() {
            return Err(AppError::Validation("No criteria entered".to_string()));
        }

        let pin = generate_event_pin();

        let mut tx = pool.begin().await?;

        let event = EventRepository::create(
            &mut tx,
            payload.name.trim(),
            payload.date.trim(),
            &pin,
            &judges,
            &criteria,
            payload.organizer.trim(),
        )
        .await?;

        // Every team starts on the scoreboard at zero
        for (position, name) in teams.iter().enumerate() {
            let team = TeamRepository::create(&mut tx, &event.id, name, position as i32).await?;
            ScoreRepository::create_zero(&mut tx, &team.id, &event.id).await?;
        }

        tx.commit().await?;

        info!(pin = %event.pin, name = %event.name, teams = teams.len(), "event created");

        Ok(CreateEventResponse {
            success: "new event created".to_string(),
            pin: event.pin,
        })
    }

    /// Get an event by pin, including its team names
    pub async fn get_event(pool: &PgPool, pin: &str) -> AppResult<EventResponse> {
        let event = Self::find_by_pin(pool, pin).await?;
        let teams = TeamRepository::list_for_event(pool, &event.id).await?;

        Ok(EventResponse {
            id: event.id,
            name: event.name,
            date: event.date,
            pin: event.pin,
            judges: event.judges,
            criteria: event.criteria,
            organizer: event.organizer,
            teams: teams.into_iter().map(|t| t.name).collect(),
            created_at: event.created_at,
        })
    }

    /// List an organizer's events
    pub async fn list_events(pool: &PgPool, organizer: &str) -> AppResult<EventsListResponse> {
        let events = EventRepository::list_by_organizer(pool, organizer).await?;
        if events.is_empty() {
            return Err(AppError::NotFound("No events found".to_string()));
        }

        let events = events
            .into_iter()
            .map(|e| EventSummary {
                id: e.id,
                name: e.name,
                date: e.date,
                pin: e.pin,
                organizer: e.organizer,
                created_at: e.created_at,
            })
            .collect();

        Ok(EventsListResponse { events })
    }

    /// Delete an event and drop its live judging sessions
    pub async fn delete_event(
        pool: &PgPool,
        judging: &JudgingCoordinator,
        pin: &str,
    ) -> AppResult<()> {
        let event = Self::find_by_pin(pool, pin).await?;

        EventRepository::delete(pool, &event.id).await?;
        judging.forget_event(event.id).await;

        info!(pin = %event.pin, name = %event.name, "event deleted");

        Ok(())
    }

    /// Find an event by pin
    pub async fn find_by_pin(pool: &PgPool, pin: &str) -> AppResult<Event> {
        EventRepository::find_by_pin(pool, pin)
            .await?
            .ok_or_else(|| AppError::NotFound("The event doesn't exist".to_string()))
    }

    /// Resolve an event reference that may be a pin or an event name
    ///
    /// Vote and note writes historically keyed events by name; pins are tried
    /// first and names keep working as a fallback.
    pub async fn resolve_event(pool: &PgPool, reference: &str) -> AppResult<Option<Event>> {
        if let Some(event) = EventRepository::find_by_pin(pool, reference).await? {
            return Ok(Some(event));
        }

        EventRepository::find_by_name(pool, reference).await
    }
}
