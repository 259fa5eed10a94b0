//! Weather value objects

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Current conditions at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Lower-cased condition, e.g. `"clear"`, `"rain"`
    pub condition: String,
    pub temperature_c: f64,
}

impl CurrentWeather {
    pub fn new(condition: impl AsRef<str>, temperature_c: f64) -> Self {
        Self {
            condition: condition.as_ref().trim().to_lowercase(),
            temperature_c,
        }
    }
}

/// One hour of forecast data, in the location's local time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyWeatherSample {
    pub time: NaiveDateTime,
    pub temperature_c: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Precipitation probability in percent
    pub precipitation_probability: u8,
}

impl HourlyWeatherSample {
    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// `HH:MM` label used in summaries
    pub fn clock_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Daily aggregate values reported alongside the hourly series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub uv_index_max: Option<f64>,
}

/// Hourly and daily forecast for one location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub hourly: Vec<HourlyWeatherSample>,
    pub daily: Vec<DailyWeather>,
}

impl Forecast {
    /// First day the forecast covers, in the location's local time.
    ///
    /// Providers report days in the forecast location's time zone, so this
    /// can differ from the host's current date.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.daily
            .first()
            .map(|d| d.date)
            .or_else(|| self.hourly.first().map(HourlyWeatherSample::date))
    }

    /// Maximum UV index reported for `date`
    pub fn uv_index_max(&self, date: NaiveDate) -> Option<f64> {
        self.daily
            .iter()
            .find(|d| d.date == date)
            .and_then(|d| d.uv_index_max)
    }
}
