//! Utility functions

pub mod token;
pub mod validation;

pub use token::{generate_event_pin, generate_secure_token};
pub use validation::{parse_newline_list, validate_not_blank, validate_score};
