//! Domain error types

use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("No weather samples available for {date}")]
    NoWeatherSamples { date: NaiveDate },

    #[error("Invalid outing time '{0}' (expected HH:MM)")]
    InvalidOutingTime(String),

    #[error("Invalid chore: {0}")]
    InvalidChore(String),

    #[error("Forecast contains no days")]
    EmptyForecast,
}

/// Errors raised when user-supplied input is rejected before any write.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("User is not signed in (missing user id)")]
    MissingUserId,

    #[error("Priority must be within [0, 1], got {0}")]
    PriorityOutOfRange(f64),
}
