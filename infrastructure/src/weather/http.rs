//! HTTP weather provider
//!
//! Current conditions come from OpenWeather (by city name), the hourly
//! forecast from Open-Meteo (by coordinates, local time zone, wind in m/s).

use super::payload::{DAILY_FIELDS, HOURLY_FIELDS, parse_current, parse_forecast};
use advisor_application::{WeatherError, WeatherProvider};
use advisor_domain::{CurrentWeather, Forecast};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// [`WeatherProvider`] backed by the OpenWeather and Open-Meteo HTTP APIs
pub struct HttpWeatherProvider {
    client: Client,
    current_url: String,
    forecast_url: String,
    api_key: String,
    forecast_days: u8,
}

impl HttpWeatherProvider {
    pub fn new(
        client: Client,
        current_url: impl Into<String>,
        forecast_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            current_url: current_url.into().trim_end_matches('/').to_string(),
            forecast_url: forecast_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            forecast_days: 2,
        }
    }

    pub fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days;
        self
    }

    async fn get_text(&self, request: reqwest::RequestBuilder) -> Result<String, WeatherError> {
        let response = request
            .send()
            .await
            .map_err(|e| WeatherError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            warn!("Weather request failed with HTTP {}", status.as_u16());
            return Err(WeatherError::RequestFailed {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for HttpWeatherProvider {
    async fn current_weather(&self, location: &str) -> Result<CurrentWeather, WeatherError> {
        debug!("Fetching current weather for {}", location);
        let request = self
            .client
            .get(format!("{}/weather", self.current_url))
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ]);

        let body = self.get_text(request).await?;
        parse_current(&body)
    }

    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError> {
        debug!("Fetching forecast for ({}, {})", latitude, longitude);
        let request = self
            .client
            .get(format!("{}/forecast", self.forecast_url))
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("wind_speed_unit", "ms".to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", self.forecast_days.to_string()),
            ]);

        let body = self.get_text(request).await?;
        parse_forecast(&body)
    }
}

/// Pull a human-readable message out of an error body.
///
/// OpenWeather answers `{"cod": 401, "message": "..."}`, Open-Meteo
/// `{"error": true, "reason": "..."}`.
fn error_message(body: &str, reason: Option<&str>) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| v.get("message").or_else(|| v.get("reason")))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| reason.unwrap_or("Unknown").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mockito::Matcher;

    fn provider(server: &mockito::Server) -> HttpWeatherProvider {
        HttpWeatherProvider::new(Client::new(), server.url(), server.url(), "ow-key")
    }

    #[tokio::test]
    async fn test_current_weather_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/weather")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Osaka".into()),
                Matcher::UrlEncoded("appid".into(), "ow-key".into()),
                Matcher::UrlEncoded("units".into(), "metric".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"weather": [{"main": "Rain"}], "main": {"temp": 19.4}}"#)
            .create_async()
            .await;

        let current = provider(&server).current_weather("Osaka").await.unwrap();
        assert_eq!(current, CurrentWeather::new("rain", 19.4));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_current_weather_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/weather")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"cod": 401, "message": "Invalid API key."}"#)
            .create_async()
            .await;

        let err = provider(&server).current_weather("Osaka").await.unwrap_err();
        assert_eq!(
            err,
            WeatherError::RequestFailed {
                status: 401,
                message: "Invalid API key.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_forecast_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/forecast")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("latitude".into(), "34.6937".into()),
                Matcher::UrlEncoded("longitude".into(), "135.5023".into()),
                Matcher::UrlEncoded("hourly".into(), HOURLY_FIELDS.into()),
                Matcher::UrlEncoded("daily".into(), DAILY_FIELDS.into()),
                Matcher::UrlEncoded("wind_speed_unit".into(), "ms".into()),
                Matcher::UrlEncoded("timezone".into(), "auto".into()),
                Matcher::UrlEncoded("forecast_days".into(), "3".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"hourly": {
                    "time": ["2025-07-04T00:00"],
                    "temperature_2m": [25.0],
                    "relative_humidity_2m": [70],
                    "wind_speed_10m": [2.0],
                    "precipitation_probability": [30]
                }, "daily": {"time": ["2025-07-04"], "uv_index_max": [8.1]}}"#,
            )
            .create_async()
            .await;

        let forecast = provider(&server)
            .with_forecast_days(3)
            .forecast(34.6937, 135.5023)
            .await
            .unwrap();
        assert_eq!(forecast.hourly.len(), 1);
        assert_eq!(forecast.first_date(), NaiveDate::from_ymd_opt(2025, 7, 4));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_forecast_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/forecast")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error": true, "reason": "Cannot initialize WeatherVariable"}"#)
            .create_async()
            .await;

        let err = provider(&server).forecast(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, WeatherError::RequestFailed { status: 400, .. }));
    }

    #[test]
    fn test_error_message_openweather() {
        let body = r#"{"cod": 401, "message": "Invalid API key."}"#;
        assert_eq!(error_message(body, Some("Unauthorized")), "Invalid API key.");
    }

    #[test]
    fn test_error_message_open_meteo() {
        let body = r#"{"error": true, "reason": "Latitude must be in range of -90 to 90°."}"#;
        assert_eq!(
            error_message(body, Some("Bad Request")),
            "Latitude must be in range of -90 to 90°."
        );
    }

    #[test]
    fn test_error_message_falls_back_to_reason() {
        assert_eq!(error_message("<html>", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(error_message("", None), "Unknown");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let provider = HttpWeatherProvider::new(
            Client::new(),
            "https://api.openweathermap.org/data/2.5/",
            "https://api.open-meteo.com/v1/",
            "key",
        );
        assert_eq!(provider.current_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(provider.forecast_url, "https://api.open-meteo.com/v1");
    }
}
