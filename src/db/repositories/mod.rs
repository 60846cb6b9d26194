//! Database repositories
//!
//! Repositories encapsulate all SQL queries for their entity. They take the
//! pool (or an open transaction) explicitly and return domain models.

pub mod event_repo;
pub mod grade_repo;
pub mod note_repo;
pub mod score_repo;
pub mod team_repo;

pub use event_repo::EventRepository;
pub use grade_repo::GradeRepository;
pub use note_repo::NoteRepository;
pub use score_repo::ScoreRepository;
pub use team_repo::TeamRepository;
