//! Error types for the schedule_core library.

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for schedule_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The learning objectives file could not be read
    #[error("Cannot read learning objectives file {path:?}: {source}")]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Number of session chunks in the input differs from the configured count
    #[error("Number of topics != number of sessions: expected {expected}, found {found}")]
    SessionCountMismatch { expected: usize, found: usize },

    /// A meeting date has no pending session left to receive it
    #[error("No session left to schedule on {date}")]
    NoSessionForDate { date: NaiveDate },

    /// The term ended before every session received a date
    #[error("{unscheduled} session(s) left without a date after the term ended on {last_date}")]
    UnscheduledSessions {
        unscheduled: usize,
        last_date: NaiveDate,
    },

    /// Rendering error
    #[error("Render error: {0}")]
    Render(String),
}
