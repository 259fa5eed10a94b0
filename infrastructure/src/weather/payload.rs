//! Weather API payloads and their conversion into domain values

use advisor_application::WeatherError;
use advisor_domain::{CurrentWeather, DailyWeather, Forecast, HourlyWeatherSample};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

// ==================== OpenWeather (current conditions) ====================

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    weather: Vec<ConditionPayload>,
    main: MainPayload,
}

#[derive(Debug, Deserialize)]
struct ConditionPayload {
    main: String,
}

#[derive(Debug, Deserialize)]
struct MainPayload {
    temp: f64,
}

/// Parse an OpenWeather `data/2.5/weather` body.
///
/// The condition is the first entry's `main` group, lower-cased.
pub fn parse_current(body: &str) -> Result<CurrentWeather, WeatherError> {
    let payload: CurrentPayload =
        serde_json::from_str(body).map_err(|e| WeatherError::MalformedPayload(e.to_string()))?;

    let condition = payload
        .weather
        .first()
        .map(|w| w.main.as_str())
        .ok_or_else(|| WeatherError::MalformedPayload("empty weather list".to_string()))?;

    Ok(CurrentWeather::new(condition, payload.main.temp))
}

// ==================== Open-Meteo (hourly forecast) ====================

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    hourly: HourlyPayload,
    #[serde(default)]
    daily: Option<DailyPayload>,
}

#[derive(Debug, Deserialize)]
struct HourlyPayload {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    relative_humidity_2m: Option<Vec<Option<f64>>>,
    wind_speed_10m: Vec<Option<f64>>,
    precipitation_probability: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct DailyPayload {
    time: Vec<String>,
    #[serde(default)]
    uv_index_max: Vec<Option<f64>>,
}

/// Hourly variables requested from Open-Meteo
pub const HOURLY_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation_probability";

/// Daily variables requested from Open-Meteo
pub const DAILY_FIELDS: &str = "uv_index_max";

/// Parse an Open-Meteo `v1/forecast` body.
///
/// Hourly arrays must line up with `time`. Humidity may be absent or null and
/// then counts as 0%; a null precipitation probability counts as 0% too.
/// Temperature and wind are required for every hour.
pub fn parse_forecast(body: &str) -> Result<Forecast, WeatherError> {
    let payload: ForecastPayload =
        serde_json::from_str(body).map_err(|e| WeatherError::MalformedPayload(e.to_string()))?;
    let hourly = payload.hourly;
    let len = hourly.time.len();

    check_len("temperature_2m", hourly.temperature_2m.len(), len)?;
    check_len("wind_speed_10m", hourly.wind_speed_10m.len(), len)?;
    check_len(
        "precipitation_probability",
        hourly.precipitation_probability.len(),
        len,
    )?;
    if let Some(humidity) = &hourly.relative_humidity_2m {
        check_len("relative_humidity_2m", humidity.len(), len)?;
    }

    let mut samples = Vec::with_capacity(len);
    for (i, time) in hourly.time.iter().enumerate() {
        let time = parse_hour(time)?;
        let temperature_c = required("temperature_2m", i, hourly.temperature_2m[i])?;
        let wind_speed = required("wind_speed_10m", i, hourly.wind_speed_10m[i])?;
        let humidity = hourly
            .relative_humidity_2m
            .as_ref()
            .and_then(|h| h[i])
            .unwrap_or(0.0);
        let precipitation = hourly.precipitation_probability[i].unwrap_or(0.0);

        samples.push(HourlyWeatherSample {
            time,
            temperature_c,
            humidity: percent(humidity),
            wind_speed,
            precipitation_probability: percent(precipitation),
        });
    }

    let daily = match payload.daily {
        Some(daily) => daily
            .time
            .iter()
            .enumerate()
            .map(|(i, date)| {
                Ok(DailyWeather {
                    date: parse_date(date)?,
                    uv_index_max: daily.uv_index_max.get(i).copied().flatten(),
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?,
        None => Vec::new(),
    };

    Ok(Forecast {
        hourly: samples,
        daily,
    })
}

fn check_len(field: &str, actual: usize, expected: usize) -> Result<(), WeatherError> {
    if actual == expected {
        Ok(())
    } else {
        Err(WeatherError::MalformedPayload(format!(
            "hourly.{} has {} values for {} timestamps",
            field, actual, expected
        )))
    }
}

fn required(field: &str, index: usize, value: Option<f64>) -> Result<f64, WeatherError> {
    value.ok_or_else(|| {
        WeatherError::MalformedPayload(format!("hourly.{}[{}] is null", field, index))
    })
}

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn parse_hour(value: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .map_err(|e| WeatherError::MalformedPayload(format!("bad timestamp '{}': {}", value, e)))
}

fn parse_date(value: &str) -> Result<NaiveDate, WeatherError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| WeatherError::MalformedPayload(format!("bad date '{}': {}", value, e)))
}
