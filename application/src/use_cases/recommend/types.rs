//! Type definitions for the recommendation use case.

use crate::ports::llm_gateway::SuggestionError;
use crate::ports::record_store::StoreError;
use crate::ports::weather_provider::WeatherError;
use advisor_domain::{
    CurrentWeather, DomainError, Forecast, OutingAnalysis, ScoredChore, UserInfo, UserPreference,
    ValidationError, WeatherSummary,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while computing a recommendation.
///
/// Every variant is recoverable: the user can retry the triggering action.
#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Suggestion error: {0}")]
    Suggestion(#[from] SuggestionError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{mode} request #{request_id} was superseded by a newer request")]
    Superseded {
        mode: RecommendationMode,
        request_id: u64,
    },
}

impl RecommendationError {
    /// Check if a newer request made this result obsolete
    pub fn is_superseded(&self) -> bool {
        matches!(self, RecommendationError::Superseded { .. })
    }

    /// Check if the action was blocked before reaching any collaborator
    pub fn is_validation(&self) -> bool {
        matches!(self, RecommendationError::Validation(_))
    }
}

/// Which recommendation pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationMode {
    /// Rank the chore catalog by weather fit and overdue-ness
    Chores,
    /// Ask the language model for a daily activity plan
    Suggestions,
}

impl RecommendationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationMode::Chores => "chores",
            RecommendationMode::Suggestions => "suggestions",
        }
    }
}

impl std::fmt::Display for RecommendationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input for the chore-scoring pipeline
#[derive(Debug, Clone)]
pub struct ChoreRequest {
    pub preference: UserPreference,
    /// Location passed to the weather provider, e.g. "Tokyo"
    pub location: String,
    /// Instant used to compute how overdue each chore is
    pub now: DateTime<Utc>,
}

impl ChoreRequest {
    pub fn new(preference: UserPreference, location: impl Into<String>) -> Self {
        Self {
            preference,
            location: location.into(),
            now: Utc::now(),
        }
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// Input for the activity-suggestion pipeline
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub user_info: UserInfo,
    pub latitude: f64,
    pub longitude: f64,
    /// The day the plan is for. `None` plans for the forecast's first day.
    pub date: Option<NaiveDate>,
}

impl SuggestionRequest {
    pub fn new(user_info: UserInfo, latitude: f64, longitude: f64) -> Self {
        Self {
            user_info,
            latitude,
            longitude,
            date: None,
        }
    }

    /// Plan for a fixed date instead of the forecast's first day
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Today and tomorrow as the forecast location sees them.
    pub fn plan_days(&self, forecast: &Forecast) -> Result<(NaiveDate, NaiveDate), DomainError> {
        let today = match self.date {
            Some(date) => date,
            None => forecast.first_date().ok_or(DomainError::EmptyForecast)?,
        };
        Ok((today, today.succ_opt().unwrap_or(today)))
    }
}

/// A recommendation request; the variant selects the pipeline
#[derive(Debug, Clone)]
pub enum RecommendationRequest {
    Chores(ChoreRequest),
    Suggestions(SuggestionRequest),
}

impl RecommendationRequest {
    pub fn mode(&self) -> RecommendationMode {
        match self {
            RecommendationRequest::Chores(_) => RecommendationMode::Chores,
            RecommendationRequest::Suggestions(_) => RecommendationMode::Suggestions,
        }
    }
}

/// Ranked chores together with the weather they were scored against
#[derive(Debug, Clone, Serialize)]
pub struct ChoreRecommendations {
    pub weather: CurrentWeather,
    /// Sorted by descending score
    pub chores: Vec<ScoredChore>,
}

/// The model's activity plan and the material it was built from
#[derive(Debug, Clone, Serialize)]
pub struct ActivitySuggestion {
    pub text: String,
    pub prompt: String,
    pub today: WeatherSummary,
    pub tomorrow: WeatherSummary,
    pub outings: OutingAnalysis,
}

/// Output of [`RecommendationOrchestrator::compute_recommendations`](super::RecommendationOrchestrator::compute_recommendations)
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RecommendationOutput {
    Chores(ChoreRecommendations),
    Suggestions(ActivitySuggestion),
}

impl RecommendationOutput {
    pub fn mode(&self) -> RecommendationMode {
        match self {
            RecommendationOutput::Chores(_) => RecommendationMode::Chores,
            RecommendationOutput::Suggestions(_) => RecommendationMode::Suggestions,
        }
    }
}
