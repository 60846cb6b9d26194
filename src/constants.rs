//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default host the HTTP server binds to
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default port the HTTP server listens on
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default maximum number of pooled database connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// EVENT SETTINGS
// =============================================================================

/// Length of the generated event pin
pub const EVENT_PIN_LENGTH: usize = 6;

/// Maximum length of an event name
pub const MAX_EVENT_NAME_LENGTH: u64 = 256;

/// Maximum length of an event date string
pub const MAX_EVENT_DATE_LENGTH: u64 = 256;

/// Maximum length of the newline-separated team list
pub const MAX_TEAM_LIST_LENGTH: u64 = 4096;

/// Maximum length of the newline-separated judge list
pub const MAX_JUDGE_LIST_LENGTH: u64 = 1024;

/// Maximum length of the newline-separated criteria list
pub const MAX_CRITERIA_LIST_LENGTH: u64 = 2048;

// =============================================================================
// JUDGING SETTINGS
// =============================================================================

/// Maximum length of a team name
pub const MAX_TEAM_NAME_LENGTH: u64 = 256;

/// Maximum length of a judging criteria label
pub const MAX_CRITERIA_LENGTH: u64 = 256;

/// Maximum length of a judge name
pub const MAX_JUDGE_NAME_LENGTH: u64 = 256;

/// Maximum length of a judge's note about a team
pub const MAX_NOTE_TEXT_LENGTH: u64 = 2048;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// Base path for API endpoints
pub const API_BASE_PATH: &str = "/api/v1";
