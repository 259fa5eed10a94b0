//! Weather provider configuration from TOML (`[weather]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWeatherConfig {
    /// Base URL of the current-conditions API (OpenWeather)
    pub current_url: String,
    /// Base URL of the hourly forecast API (Open-Meteo)
    pub forecast_url: String,
    /// Environment variable holding the OpenWeather API key
    pub api_key_env: String,
    /// Number of forecast days requested; at least 2 are needed for tomorrow
    pub forecast_days: u8,
    pub timeout_seconds: u64,
}

impl Default for FileWeatherConfig {
    fn default() -> Self {
        Self {
            current_url: "https://api.openweathermap.org/data/2.5".to_string(),
            forecast_url: "https://api.open-meteo.com/v1".to_string(),
            api_key_env: "OPENWEATHER_API_KEY".to_string(),
            forecast_days: 2,
            timeout_seconds: 15,
        }
    }
}
