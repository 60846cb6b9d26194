//! Judge note handlers

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

/// Note routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_note))
        .route("/", post(handler::set_note))
}
