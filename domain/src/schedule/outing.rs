//! Outing / precipitation analysis
//!
//! Cross-references the user's outing slots with the hourly forecast. Each
//! slot is flagged when any covered hour reaches the precipitation threshold,
//! and the covered hours of every date are merged for display so the prompt
//! can exclude them from all recommendations.

use super::entities::{DaySchedule, OutingSlot};
use super::hour_range::{HourRange, format_ranges, merge_hours};
use crate::weather::entities::HourlyWeatherSample;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Precipitation probability (percent) at or above which an hour is risky
pub const HIGH_PRECIPITATION_THRESHOLD: u8 = 50;

/// Sentence used when the schedule has no outing slots at all
pub const NO_OUTING_RISK_SENTENCE: &str =
    "No high precipitation probability was found during outing hours.";

/// An hour inside an outing slot whose precipitation probability is high
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedHour {
    /// `HH:MM`
    pub time: String,
    pub probability: u8,
}

/// Risk verdict for one outing slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "risk", rename_all = "snake_case")]
pub enum PrecipitationRisk {
    High { hours: Vec<FlaggedHour> },
    Low,
}

/// One outing slot with its precipitation verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAssessment {
    pub date: NaiveDate,
    pub slot: OutingSlot,
    pub risk: PrecipitationRisk,
}

impl SlotAssessment {
    pub fn is_high_risk(&self) -> bool {
        matches!(self.risk, PrecipitationRisk::High { .. })
    }

    /// One descriptive line for the prompt
    pub fn describe(&self) -> String {
        match &self.risk {
            PrecipitationRisk::High { hours } => {
                let times = hours
                    .iter()
                    .map(|h| format!("{} ({}%)", h.time, h.probability))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "- {} {}: high precipitation risk → {}",
                    self.date, self.slot, times
                )
            }
            PrecipitationRisk::Low => {
                format!("- {} {}: low precipitation risk", self.date, self.slot)
            }
        }
    }
}

/// Merged outing hours for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayOutingHours {
    pub date: NaiveDate,
    pub ranges: Vec<HourRange>,
}

impl DayOutingHours {
    pub fn describe(&self) -> String {
        if self.ranges.is_empty() {
            format!("- {}: no outings", self.date)
        } else {
            format!("- {}: {}", self.date, format_ranges(&self.ranges))
        }
    }
}

/// Result of cross-referencing the schedule with the forecast
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutingAnalysis {
    /// One entry per slot, in schedule order
    pub assessments: Vec<SlotAssessment>,
    /// One entry per scheduled date, ordered by date
    pub outing_hours: Vec<DayOutingHours>,
}

impl OutingAnalysis {
    pub fn analyze(schedule: &[DaySchedule], hourly: &[HourlyWeatherSample]) -> Self {
        let mut hours_by_date: BTreeMap<NaiveDate, BTreeSet<u8>> = BTreeMap::new();
        let mut assessments = Vec::new();

        for day in schedule {
            let hours = hours_by_date.entry(day.date).or_default();

            for slot in &day.slots {
                hours.extend(slot.covered_hours());
                assessments.push(SlotAssessment {
                    date: day.date,
                    slot: *slot,
                    risk: assess_slot(day.date, slot, hourly),
                });
            }
        }

        let outing_hours = hours_by_date
            .into_iter()
            .map(|(date, hours)| DayOutingHours {
                date,
                ranges: merge_hours(hours),
            })
            .collect();

        Self {
            assessments,
            outing_hours,
        }
    }

    pub fn has_high_risk(&self) -> bool {
        self.assessments.iter().any(|a| a.is_high_risk())
    }

    /// Merged outing ranges for `date` (empty when the date is not scheduled)
    pub fn ranges_on(&self, date: NaiveDate) -> &[HourRange] {
        self.outing_hours
            .iter()
            .find(|d| d.date == date)
            .map(|d| d.ranges.as_slice())
            .unwrap_or(&[])
    }

    /// The outing-risk section, or the fixed sentence when there are no slots
    pub fn risk_section(&self) -> String {
        if self.assessments.is_empty() {
            return NO_OUTING_RISK_SENTENCE.to_string();
        }

        let mut section = String::from("[Precipitation during outings]");
        for assessment in &self.assessments {
            section.push('\n');
            section.push_str(&assessment.describe());
        }
        section
    }

    /// One line per scheduled date listing the merged outing hours
    pub fn outing_hours_section(&self) -> String {
        self.outing_hours
            .iter()
            .map(DayOutingHours::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn assess_slot(
    date: NaiveDate,
    slot: &OutingSlot,
    hourly: &[HourlyWeatherSample],
) -> PrecipitationRisk {
    let flagged: Vec<FlaggedHour> = hourly
        .iter()
        .filter(|s| s.date() == date && slot.covers(s.hour()))
        .filter(|s| s.precipitation_probability >= HIGH_PRECIPITATION_THRESHOLD)
        .map(|s| FlaggedHour {
            time: s.clock_label(),
            probability: s.precipitation_probability,
        })
        .collect();

    if flagged.is_empty() {
        PrecipitationRisk::Low
    } else {
        PrecipitationRisk::High { hours: flagged }
    }
}
