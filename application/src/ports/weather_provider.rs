//! Weather provider port

use advisor_domain::{CurrentWeather, Forecast};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching weather
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Weather request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed weather payload: {0}")]
    MalformedPayload(String),

    #[error("Weather request timed out")]
    Timeout,
}

/// Source of current conditions and hourly forecasts
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a named location (e.g. a city)
    async fn current_weather(&self, location: &str) -> Result<CurrentWeather, WeatherError>;

    /// Hourly and daily forecast covering at least today and tomorrow
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError>;
}
