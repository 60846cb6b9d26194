//! Business logic services
//!
//! Services sit between the HTTP handlers and the repositories. They own
//! validation beyond field shape, transactions, and the judging session
//! protocol.

pub mod event_service;
pub mod judging_service;
pub mod note_service;
pub mod result_service;

pub use event_service::EventService;
pub use judging_service::JudgingService;
pub use note_service::NoteService;
pub use result_service::ResultService;
