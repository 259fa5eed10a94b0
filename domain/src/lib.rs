//! Domain layer for chore-advisor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! ## Chore scoring
//!
//! Each chore gets a score from how well the current weather suits it and
//! how overdue it is, weighted by the user's [`UserPreference`]. Chores are
//! ranked by descending score with a stable sort.
//!
//! ## Activity prompt
//!
//! The hourly forecast is summarised per day ([`WeatherSummary`]), crossed
//! with the user's outing schedule ([`OutingAnalysis`]) and assembled into a
//! single instruction block ([`ActivityPromptTemplate`]) for a language model.

pub mod chore;
pub mod core;
pub mod prompt;
pub mod schedule;
pub mod weather;

// Re-export commonly used types
pub use chore::{
    entities::{Chore, ChoreCompletionRecord, ChoreId, ScoredChore, UserPreference},
    scoring::{ChoreScorer, UNMATCHED_WEATHER_SCORE, frequency_score, weather_score},
};
pub use core::{
    error::{DomainError, ValidationError},
    user::UserId,
};
pub use prompt::{ActivityPromptInput, ActivityPromptTemplate};
pub use schedule::{
    entities::{DaySchedule, Equipment, OutingSlot, UserInfo},
    hour_range::{HourRange, format_ranges, merge_hours},
    outing::{
        HIGH_PRECIPITATION_THRESHOLD, OutingAnalysis, PrecipitationRisk, SlotAssessment,
    },
};
pub use weather::{
    entities::{CurrentWeather, DailyWeather, Forecast, HourlyWeatherSample},
    summary::{HumidityBand, TemperatureBand, WeatherSummary},
};
