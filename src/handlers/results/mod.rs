//! Scoreboard handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Results routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(handler::get_results))
}
