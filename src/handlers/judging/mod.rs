//! Pairwise judging handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Judging routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pair", get(handler::next_pair))
        .route("/vote", post(handler::record_vote))
}
