//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod llm;
mod location;
mod output;
mod store;
mod weather;

pub use llm::FileLlmConfig;
pub use location::FileLocationConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use store::{FileChoreConfig, FileStoreConfig, StoreBackend};
pub use weather::FileWeatherConfig;

use super::error::ConfigError;
use advisor_application::ExecutionParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where weather is looked up
    pub location: FileLocationConfig,
    /// Weather provider endpoints
    pub weather: FileWeatherConfig,
    /// Language model settings
    pub llm: FileLlmConfig,
    /// Record store backend
    pub store: FileStoreConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut issues = Vec::new();
        let mut invalid = |field: &str, message: String| {
            issues.push(ConfigError::Invalid {
                field: field.to_string(),
                message,
            })
        };

        if !(-90.0..=90.0).contains(&self.location.latitude) {
            invalid("location.latitude", format!("{} is out of range", self.location.latitude));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            invalid("location.longitude", format!("{} is out of range", self.location.longitude));
        }
        if self.location.city.trim().is_empty() {
            invalid("location.city", "cannot be empty".to_string());
        }
        if self.weather.timeout_seconds == 0 {
            invalid("weather.timeout_seconds", "cannot be 0".to_string());
        }
        if self.weather.forecast_days < 2 {
            invalid(
                "weather.forecast_days",
                "must be at least 2 to cover tomorrow".to_string(),
            );
        }
        if self.llm.timeout_seconds == 0 {
            invalid("llm.timeout_seconds", "cannot be 0".to_string());
        }
        if self.llm.model.trim().is_empty() {
            invalid("llm.model", "cannot be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            invalid("llm.temperature", format!("{} is outside 0.0..=2.0", self.llm.temperature));
        }
        if let Err(e) = self.store.catalog() {
            invalid("store.chores", e.to_string());
        }

        issues
    }

    /// Timeouts and prompt language for the orchestrator
    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_weather_timeout(Duration::from_secs(self.weather.timeout_seconds))
            .with_suggestion_timeout(Duration::from_secs(self.llm.timeout_seconds))
            .with_response_language(self.llm.response_language.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[location]
city = "Sapporo"
latitude = 43.06
longitude = 141.35

[weather]
timeout_seconds = 5

[llm]
model = "gpt-4o-mini"
temperature = 0.2
response_language = "Japanese"

[store]
backend = "postgrest"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.location.city, "Sapporo");
        assert_eq!(config.weather.timeout_seconds, 5);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.store.backend, StoreBackend::Postgrest);
        assert_eq!(config.output.format, Some(FileOutputFormat::Json));
        assert!(!config.output.color);
        // Defaults should apply
        assert_eq!(config.llm.max_tokens, 600);
        assert_eq!(config.weather.api_key_env, "OPENWEATHER_API_KEY");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.location.city, "Tokyo");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let mut config = FileConfig::default();
        config.location.latitude = 120.0;
        config.weather.timeout_seconds = 0;
        config.llm.model = " ".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues[0].to_string().contains("location.latitude"));
    }

    #[test]
    fn test_execution_params() {
        let mut config = FileConfig::default();
        config.llm.timeout_seconds = 90;
        config.llm.response_language = "Japanese".to_string();

        let params = config.execution_params();
        assert_eq!(params.weather_timeout, Duration::from_secs(15));
        assert_eq!(params.suggestion_timeout, Duration::from_secs(90));
        assert_eq!(params.response_language, "Japanese");
    }
}
