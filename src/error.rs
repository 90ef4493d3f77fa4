//! Error types.
//!
//! Allocation never fails as a whole: unplaceable units are recorded on the
//! [`Timetable`](crate::models::Timetable). `TimetableError` covers the
//! fallible edges instead: parsing slot literals, loading configuration,
//! and deriving lab batches.

use thiserror::Error;

/// Errors raised while constructing inputs or configuration.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("invalid time slot '{value}': {reason}")]
    InvalidTimeSlot { value: String, reason: String },

    #[error("invalid clock time '{0}', expected HH:MM")]
    InvalidClockTime(String),

    #[error("invalid day name '{0}'")]
    InvalidDay(String),

    #[error("no batch configuration for department={department} semester={semester}")]
    MissingBatchConfig { department: String, semester: u32 },

    #[error("invalid batch configuration for department={department} semester={semester}: {reason}")]
    InvalidBatchConfig {
        department: String,
        semester: u32,
        reason: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TimetableError>;
