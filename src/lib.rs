//! PairJudge - Hackathon Pairwise Judging System
//!
//! This library provides the core functionality for the PairJudge platform,
//! a judging service that walks each judge through pairwise team comparisons
//! and accumulates the results into a live scoreboard.
//!
//! # Features
//!
//! - Deterministic pairwise scheduling per (event, criteria, judge)
//! - Append-only grade ledger with canonicalized pair detection
//! - Accumulating team scores updated atomically with each vote
//! - Per-judge notes carried onto the comparison screen
//! - Pin-based event access for judges and spectators
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Pairing**: Pure scheduling engine and session coordination
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pairing;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
