//! Merging of hour sets into contiguous ranges

use serde::Serialize;
use std::collections::BTreeSet;

/// A closed run of whole hours, `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourRange {
    pub start: u8,
    /// Last hour covered by the run
    pub end: u8,
}

impl HourRange {
    pub fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u8) -> bool {
        (self.start..=self.end).contains(&hour)
    }
}

impl std::fmt::Display for HourRange {
    /// Rendered as a half-open clock range: `9:00〜12:00` for hours 9..=11
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:00〜{}:00", self.start, u32::from(self.end) + 1)
    }
}

/// Merge hours into maximal runs of consecutive values.
///
/// Input order does not matter and duplicates collapse.
pub fn merge_hours(hours: impl IntoIterator<Item = u8>) -> Vec<HourRange> {
    let sorted: BTreeSet<u8> = hours.into_iter().collect();

    let mut ranges: Vec<HourRange> = Vec::new();
    for hour in sorted {
        match ranges.last_mut() {
            Some(last) if u16::from(hour) == u16::from(last.end) + 1 => last.end = hour,
            _ => ranges.push(HourRange::new(hour, hour)),
        }
    }
    ranges
}

/// Join ranges for display, e.g. `9:00〜12:00, 14:00〜16:00`
pub fn format_ranges(ranges: &[HourRange]) -> String {
    ranges
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
