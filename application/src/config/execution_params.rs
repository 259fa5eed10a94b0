//! Execution parameters: bounds on external calls.
//!
//! [`ExecutionParams`] groups the static parameters that control how
//! [`RecommendationOrchestrator`](crate::use_cases::recommend::RecommendationOrchestrator)
//! talks to its collaborators. These are application-layer concerns, not
//! domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// External-call control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Upper bound for each weather request.
    pub weather_timeout: Duration,
    /// Upper bound for the language-model request.
    pub suggestion_timeout: Duration,
    /// Language the activity plan is written in.
    pub response_language: String,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            weather_timeout: Duration::from_secs(15),
            suggestion_timeout: Duration::from_secs(60),
            response_language: "English".to_string(),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_weather_timeout(mut self, timeout: Duration) -> Self {
        self.weather_timeout = timeout;
        self
    }

    pub fn with_suggestion_timeout(mut self, timeout: Duration) -> Self {
        self.suggestion_timeout = timeout;
        self
    }

    pub fn with_response_language(mut self, language: impl Into<String>) -> Self {
        self.response_language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ExecutionParams::default();
        assert_eq!(params.weather_timeout, Duration::from_secs(15));
        assert_eq!(params.suggestion_timeout, Duration::from_secs(60));
        assert_eq!(params.response_language, "English");
    }

    #[test]
    fn test_builders() {
        let params = ExecutionParams::default()
            .with_weather_timeout(Duration::from_secs(3))
            .with_suggestion_timeout(Duration::from_secs(30))
            .with_response_language("Japanese");
        assert_eq!(params.weather_timeout, Duration::from_secs(3));
        assert_eq!(params.suggestion_timeout, Duration::from_secs(30));
        assert_eq!(params.response_language, "Japanese");
    }
}
