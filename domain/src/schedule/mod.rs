//! Outing schedules, hour-range merging and outing precipitation analysis.

pub mod entities;
pub mod hour_range;
pub mod outing;
