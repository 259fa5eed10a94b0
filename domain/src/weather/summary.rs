//! Daily weather summaries
//!
//! Reduces the hourly series for one calendar date into aggregate
//! statistics, qualitative bands and one display line per hour.

use super::entities::HourlyWeatherSample;
use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::Serialize;

/// Qualitative band for the mean temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    VeryHot,
    SomewhatHot,
    Comfortable,
    Cool,
}

impl TemperatureBand {
    /// Inclusive lower bounds, checked from hottest to coolest
    pub fn classify(mean_c: f64) -> Self {
        if mean_c >= 30.0 {
            TemperatureBand::VeryHot
        } else if mean_c >= 25.0 {
            TemperatureBand::SomewhatHot
        } else if mean_c >= 18.0 {
            TemperatureBand::Comfortable
        } else {
            TemperatureBand::Cool
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::VeryHot => "very hot",
            TemperatureBand::SomewhatHot => "somewhat hot",
            TemperatureBand::Comfortable => "comfortable",
            TemperatureBand::Cool => "cool",
        }
    }
}

/// Qualitative band for the mean relative humidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HumidityBand {
    VeryHumid,
    SomewhatHumid,
    Comfortable,
}

impl HumidityBand {
    pub fn classify(mean_pct: f64) -> Self {
        if mean_pct >= 70.0 {
            HumidityBand::VeryHumid
        } else if mean_pct >= 50.0 {
            HumidityBand::SomewhatHumid
        } else {
            HumidityBand::Comfortable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HumidityBand::VeryHumid => "very humid",
            HumidityBand::SomewhatHumid => "somewhat humid",
            HumidityBand::Comfortable => "comfortable",
        }
    }
}

/// Mean / min / max over a non-empty series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl Stats {
    /// Returns `None` for an empty series
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }

        (count > 0).then(|| Stats {
            mean: sum / count as f64,
            min,
            max,
        })
    }
}

/// Aggregated weather for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub date: NaiveDate,
    pub hour_count: usize,
    pub temperature: Stats,
    pub humidity: Stats,
    pub precipitation: Stats,
    pub wind: Stats,
    pub temperature_band: TemperatureBand,
    pub humidity_band: HumidityBand,
    pub uv_index_max: Option<f64>,
    pub hourly_lines: Vec<String>,
}

impl WeatherSummary {
    /// Summarise the samples that fall on `date`.
    ///
    /// Samples on other dates are ignored. Fails with
    /// [`DomainError::NoWeatherSamples`] when none remain.
    pub fn for_date(
        samples: &[HourlyWeatherSample],
        date: NaiveDate,
        uv_index_max: Option<f64>,
    ) -> Result<Self, DomainError> {
        let day: Vec<&HourlyWeatherSample> = samples.iter().filter(|s| s.date() == date).collect();

        let no_samples = || DomainError::NoWeatherSamples { date };
        let temperature =
            Stats::from_values(day.iter().map(|s| s.temperature_c)).ok_or_else(no_samples)?;
        let humidity =
            Stats::from_values(day.iter().map(|s| f64::from(s.humidity))).ok_or_else(no_samples)?;
        let precipitation =
            Stats::from_values(day.iter().map(|s| f64::from(s.precipitation_probability)))
                .ok_or_else(no_samples)?;
        let wind = Stats::from_values(day.iter().map(|s| s.wind_speed)).ok_or_else(no_samples)?;

        Ok(Self {
            date,
            hour_count: day.len(),
            temperature_band: TemperatureBand::classify(temperature.mean),
            humidity_band: HumidityBand::classify(humidity.mean),
            temperature,
            humidity,
            precipitation,
            wind,
            uv_index_max,
            hourly_lines: day.iter().map(|s| hourly_line(s)).collect(),
        })
    }

    /// Render the summary block; `day_label` is e.g. "today" or "tomorrow".
    pub fn render(&self, day_label: &str) -> String {
        let mut out = format!("[Weather ({}, {}): hourly detail]\n", day_label, self.date);
        for line in &self.hourly_lines {
            out.push_str(line);
            out.push('\n');
        }

        out.push_str(&format!(
            "- Temperature (mean): {:.1}°C (min {:.1}°C, max {:.1}°C) → {}\n",
            self.temperature.mean,
            self.temperature.min,
            self.temperature.max,
            self.temperature_band.label()
        ));
        out.push_str(&format!(
            "- Humidity (mean): {:.0}% → {}\n",
            self.humidity.mean,
            self.humidity_band.label()
        ));
        out.push_str(&format!(
            "- Precipitation probability (mean): {:.0}% (min {:.0}%, max {:.0}%)\n",
            self.precipitation.mean, self.precipitation.min, self.precipitation.max
        ));
        out.push_str(&format!("- Wind speed (mean): {:.1}m/s\n", self.wind.mean));
        match self.uv_index_max {
            Some(uv) => out.push_str(&format!("- UV index ({}): max {}", day_label, uv)),
            None => out.push_str(&format!("- UV index ({}): unknown", day_label)),
        }

        out
    }
}

fn hourly_line(sample: &HourlyWeatherSample) -> String {
    format!(
        "  - {}: temperature {:.1}°C, humidity {}%, wind {:.1}m/s, precipitation {}%",
        sample.clock_label(),
        sample.temperature_c,
        sample.humidity,
        sample.wind_speed,
        sample.precipitation_probability
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample(day: &str, hour: u32, temp: f64, humidity: u8, precip: u8) -> HourlyWeatherSample {
        HourlyWeatherSample {
            time: date(day).and_hms_opt(hour, 0, 0).unwrap(),
            temperature_c: temp,
            humidity,
            wind_speed: 2.3,
            precipitation_probability: precip,
        }
    }

    #[test]
    fn test_temperature_bands_inclusive() {
        assert_eq!(TemperatureBand::classify(30.0), TemperatureBand::VeryHot);
        assert_eq!(TemperatureBand::classify(29.9), TemperatureBand::SomewhatHot);
        assert_eq!(TemperatureBand::classify(25.0), TemperatureBand::SomewhatHot);
        assert_eq!(TemperatureBand::classify(18.0), TemperatureBand::Comfortable);
        assert_eq!(TemperatureBand::classify(17.9), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::classify(-5.0), TemperatureBand::Cool);
    }

    #[test]
    fn test_humidity_bands_inclusive() {
        assert_eq!(HumidityBand::classify(70.0), HumidityBand::VeryHumid);
        assert_eq!(HumidityBand::classify(69.0), HumidityBand::SomewhatHumid);
        assert_eq!(HumidityBand::classify(50.0), HumidityBand::SomewhatHumid);
        assert_eq!(HumidityBand::classify(49.9), HumidityBand::Comfortable);
    }

    #[test]
    fn test_summary_restricts_to_date() {
        let samples = vec![
            sample("2025-07-03", 9, 24.0, 60, 10),
            sample("2025-07-03", 10, 26.0, 80, 50),
            sample("2025-07-04", 9, 40.0, 10, 90),
        ];

        let summary = WeatherSummary::for_date(&samples, date("2025-07-03"), Some(6.0)).unwrap();
        assert_eq!(summary.hour_count, 2);
        assert_eq!(summary.temperature.mean, 25.0);
        assert_eq!(summary.temperature.min, 24.0);
        assert_eq!(summary.temperature.max, 26.0);
        assert_eq!(summary.humidity.mean, 70.0);
        assert_eq!(summary.precipitation.mean, 30.0);
        assert_eq!(summary.precipitation.max, 50.0);
        assert_eq!(summary.temperature_band, TemperatureBand::SomewhatHot);
        assert_eq!(summary.humidity_band, HumidityBand::VeryHumid);
    }

    #[test]
    fn test_hourly_line_format() {
        let samples = vec![sample("2025-07-03", 9, 24.06, 61, 20)];
        let summary = WeatherSummary::for_date(&samples, date("2025-07-03"), None).unwrap();
        assert_eq!(
            summary.hourly_lines[0],
            "  - 09:00: temperature 24.1°C, humidity 61%, wind 2.3m/s, precipitation 20%"
        );
    }

    #[test]
    fn test_empty_day_is_an_error() {
        let samples = vec![sample("2025-07-03", 9, 24.0, 60, 10)];
        let err = WeatherSummary::for_date(&samples, date("2025-07-05"), None).unwrap_err();
        assert_eq!(
            err,
            DomainError::NoWeatherSamples {
                date: date("2025-07-05")
            }
        );

        assert!(WeatherSummary::for_date(&[], date("2025-07-03"), None).is_err());
    }

    #[test]
    fn test_render_contains_aggregates() {
        let samples = vec![
            sample("2025-07-03", 9, 31.0, 40, 0),
            sample("2025-07-03", 10, 33.0, 40, 20),
        ];
        let summary = WeatherSummary::for_date(&samples, date("2025-07-03"), Some(8.0)).unwrap();
        let text = summary.render("today");

        assert!(text.starts_with("[Weather (today, 2025-07-03): hourly detail]"));
        assert!(text.contains("- Temperature (mean): 32.0°C (min 31.0°C, max 33.0°C) → very hot"));
        assert!(text.contains("- Humidity (mean): 40% → comfortable"));
        assert!(text.contains("- Precipitation probability (mean): 10% (min 0%, max 20%)"));
        assert!(text.contains("- UV index (today): max 8"));
    }

    #[test]
    fn test_render_unknown_uv() {
        let samples = vec![sample("2025-07-03", 9, 20.0, 40, 0)];
        let summary = WeatherSummary::for_date(&samples, date("2025-07-03"), None).unwrap();
        assert!(summary.render("tomorrow").ends_with("- UV index (tomorrow): unknown"));
    }
}
