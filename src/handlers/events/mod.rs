//! Event management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Event routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_event))
        .route("/", get(handler::list_events))
        .route("/{pin}", get(handler::get_event))
        .route("/{pin}", delete(handler::delete_event))
}
