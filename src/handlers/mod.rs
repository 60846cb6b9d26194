//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod events;
pub mod health;
pub mod judging;
pub mod notes;
pub mod results;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/events", events::routes())
        .nest("/judging", judging::routes())
        .nest("/notes", notes::routes())
        .nest("/results", results::routes())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::{
        config::{Config, DatabaseConfig, ServerConfig},
        state::AppState,
    };

    /// Router backed by a lazy pool; nothing here touches the database, so
    /// requests must fail before any query runs.
    fn app() -> Router {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            database: DatabaseConfig {
                url: "postgres://localhost/unused".to_string(),
                max_connections: 1,
            },
        };
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .expect("lazy pool");

        super::routes().with_state(AppState::new(pool, config))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_event_rejects_blank_name() {
        let payload = json!({
            "name": "   ",
            "date": "June 5",
            "teams": "Alpha\nBeta",
            "judges": "Ada",
            "criteria": "Design",
            "organizer": "Hack Club",
        });

        let response = app().oneshot(post_json("/events", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("No name entered"), "got: {error}");
    }

    #[tokio::test]
    async fn test_create_event_rejects_blank_team_list() {
        let payload = json!({
            "name": "Demo Day",
            "date": "June 5",
            "teams": "\n \n",
            "judges": "Ada",
            "criteria": "Design",
            "organizer": "Hack Club",
        });

        let response = app().oneshot(post_json("/events", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("No teams entered"));
    }

    #[tokio::test]
    async fn test_vote_rejects_negative_score() {
        let payload = json!({
            "event": "AB12CD",
            "team_one": "Alpha",
            "team_two": "Beta",
            "criteria": "Design",
            "judge_name": "Ada",
            "winner": "Alpha",
            "winner_score": "-1",
        });

        let response = app().oneshot(post_json("/judging/vote", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Winner score cannot be negative"));
    }

    #[tokio::test]
    async fn test_vote_rejects_blank_judge_name() {
        let payload = json!({
            "event": "AB12CD",
            "team_one": "Alpha",
            "team_two": "Beta",
            "criteria": "Design",
            "judge_name": " ",
            "winner": "Alpha",
            "winner_score": "1",
        });

        let response = app().oneshot(post_json("/judging/vote", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("No judge name entered"));
    }

    #[tokio::test]
    async fn test_vote_missing_judge_name_reads_as_blank() {
        let payload = json!({
            "event": "AB12CD",
            "team_one": "Alpha",
            "team_two": "Beta",
            "criteria": "Design",
            "winner": "Alpha",
            "winner_score": "1",
        });

        let response = app().oneshot(post_json("/judging/vote", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("No judge name entered"));
    }

    #[tokio::test]
    async fn test_set_note_missing_fields_read_as_blank() {
        let response = app().oneshot(post_json("/notes", json!({}))).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("No note text entered"), "got: {error}");
        assert!(error.contains("No event name entered"), "got: {error}");
    }

    #[tokio::test]
    async fn test_next_pair_requires_query_params() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/judging/pair?event=AB12CD")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_events_requires_organizer() {
        let response = app()
            .oneshot(Request::builder().uri("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("No organizer entered"));
    }
}
