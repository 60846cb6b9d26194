//! Database models
//!
//! This module contains all database entity models used throughout the application.

pub mod event;
pub mod grade;
pub mod note;
pub mod score;
pub mod team;

pub use event::Event;
pub use grade::Grade;
pub use note::Note;
pub use score::ScoreRecord;
pub use team::Team;
