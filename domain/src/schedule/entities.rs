//! Outing schedule and household profile

use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hours a user is away from home, half-open `[start_hour, end_hour)`
///
/// Minutes are not tracked; `"09:30"` is read as hour 9. The end hour may be
/// 24 to cover the last hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOutingSlot", into = "RawOutingSlot")]
pub struct OutingSlot {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl OutingSlot {
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self, DomainError> {
        for hour in [start_hour, end_hour] {
            if hour > 24 {
                return Err(DomainError::InvalidOutingTime(format!("{}:00", hour)));
            }
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// Parse `"HH:MM"` strings, ignoring minutes
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        Self::new(parse_hour(start)?, parse_hour(end)?)
    }

    /// Hours covered by the slot; empty when `end_hour <= start_hour`
    pub fn covered_hours(&self) -> std::ops::Range<u8> {
        self.start_hour..self.end_hour
    }

    pub fn covers(&self, hour: u32) -> bool {
        hour >= u32::from(self.start_hour) && hour < u32::from(self.end_hour)
    }
}

impl std::fmt::Display for OutingSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:00〜{}:00", self.start_hour, self.end_hour)
    }
}

fn parse_hour(raw: &str) -> Result<u8, DomainError> {
    let invalid = || DomainError::InvalidOutingTime(raw.to_string());
    let hour = raw.trim().split(':').next().ok_or_else(invalid)?;
    let hour: u8 = hour.parse().map_err(|_| invalid())?;
    if hour > 24 {
        return Err(invalid());
    }
    Ok(hour)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawOutingSlot {
    start: String,
    end: String,
}

impl TryFrom<RawOutingSlot> for OutingSlot {
    type Error = DomainError;

    fn try_from(raw: RawOutingSlot) -> Result<Self, Self::Error> {
        OutingSlot::parse(&raw.start, &raw.end)
    }
}

impl From<OutingSlot> for RawOutingSlot {
    fn from(slot: OutingSlot) -> Self {
        RawOutingSlot {
            start: format!("{:02}:00", slot.start_hour),
            end: format!("{:02}:00", slot.end_hour),
        }
    }
}

/// Outing slots for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    #[serde(default)]
    pub slots: Vec<OutingSlot>,
}

/// Appliances available at home
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    pub humidifier: bool,
    pub air_conditioner: bool,
    pub dryer: bool,
}

/// Household profile used to build the activity prompt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    /// Chores the user wants suggestions for; nothing else is suggested
    pub chores: Vec<String>,
    /// Items on hand for weather changes (umbrella, parasol, ...)
    pub items: Vec<String>,
    pub equipment: Equipment,
    pub schedule: Vec<DaySchedule>,
}
