//! Error types for the core domain

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    /// The event's end date precedes its start date.
    #[error("Invalid event range: end {end} precedes start {start}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A required field was empty or malformed.
    #[error("Invalid event field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, EventError>;
