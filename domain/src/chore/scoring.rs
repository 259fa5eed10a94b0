//! Chore recommendation scoring
//!
//! A chore's score is a weighted sum of two components:
//!
//! - **weather score**: 1.0 when the current condition is one of the chore's
//!   ideal conditions, otherwise [`UNMATCHED_WEATHER_SCORE`]
//! - **frequency score**: how overdue the chore is relative to its ideal
//!   interval, saturating at 1.0
//!
//! The weights come from the user's [`UserPreference`].

use super::entities::{Chore, ChoreCompletionRecord, ChoreId, ScoredChore, UserPreference};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Weather score for a chore whose ideal conditions do not include the
/// current one. Non-zero so that weather alone never disqualifies a chore.
pub const UNMATCHED_WEATHER_SCORE: f64 = 0.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// 1.0 if `condition` is ideal for the chore, else [`UNMATCHED_WEATHER_SCORE`]
pub fn weather_score(chore: &Chore, condition: &str) -> f64 {
    if chore.suits_weather(condition) {
        1.0
    } else {
        UNMATCHED_WEATHER_SCORE
    }
}

/// Days elapsed since the last completion.
///
/// A chore that was never completed is infinitely overdue and reports
/// `f64::MAX`. Completions stamped in the future count as zero days.
pub fn days_since(last_completed_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    match last_completed_at {
        Some(last) => ((now - last).num_milliseconds() as f64 / MILLIS_PER_DAY).max(0.0),
        None => f64::MAX,
    }
}

/// `min(days / ideal_frequency_days, 1.0)`
pub fn frequency_score(days_since_last: f64, ideal_frequency_days: f64) -> f64 {
    if ideal_frequency_days <= 0.0 {
        return 1.0;
    }
    (days_since_last / ideal_frequency_days).min(1.0)
}

/// Scores chores for one user, one weather condition and one instant.
#[derive(Debug, Clone)]
pub struct ChoreScorer<'a> {
    preference: &'a UserPreference,
    condition: &'a str,
    now: DateTime<Utc>,
}

impl<'a> ChoreScorer<'a> {
    pub fn new(preference: &'a UserPreference, condition: &'a str, now: DateTime<Utc>) -> Self {
        Self {
            preference,
            condition,
            now,
        }
    }

    /// Score a single chore given its most recent completion (if any)
    pub fn score(&self, chore: &Chore, last_completed_at: Option<DateTime<Utc>>) -> f64 {
        let weather = weather_score(chore, self.condition);
        let frequency = frequency_score(
            days_since(last_completed_at, self.now),
            chore.ideal_frequency_days,
        );

        weather * self.preference.weather_priority + frequency * self.preference.frequency_priority
    }

    /// Score every chore and sort by descending score.
    ///
    /// The sort is stable: chores with equal scores keep their catalog order.
    pub fn rank(&self, chores: Vec<Chore>, history: &[ChoreCompletionRecord]) -> Vec<ScoredChore> {
        let latest = latest_completions(history);

        let mut scored: Vec<ScoredChore> = chores
            .into_iter()
            .map(|chore| {
                let score = self.score(&chore, latest.get(&chore.id).copied());
                ScoredChore { chore, score }
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

/// Most recent completion per chore, regardless of history ordering
pub fn latest_completions(history: &[ChoreCompletionRecord]) -> HashMap<ChoreId, DateTime<Utc>> {
    let mut latest: HashMap<ChoreId, DateTime<Utc>> = HashMap::new();
    for record in history {
        latest
            .entry(record.chore_id.clone())
            .and_modify(|at| {
                if record.completed_at > *at {
                    *at = record.completed_at;
                }
            })
            .or_insert(record.completed_at);
    }
    latest
}
