//! Chore entities and user preferences

use crate::core::error::{DomainError, ValidationError};
use crate::core::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Chore identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoreId(String);

impl ChoreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChoreId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A recurring household task (Entity)
///
/// Reference data maintained outside this crate. Ideal weather conditions
/// are stored lower-cased so they compare directly against provider
/// condition strings such as `"clear"` or `"clouds"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chore {
    pub id: ChoreId,
    pub name: String,
    pub ideal_weather: BTreeSet<String>,
    pub ideal_frequency_days: f64,
}

impl Chore {
    /// Create a chore, rejecting empty names and non-positive intervals.
    pub fn new<I, S>(
        id: impl Into<ChoreId>,
        name: impl Into<String>,
        ideal_weather: I,
        ideal_frequency_days: f64,
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = id.into();
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidChore(format!("chore {} has no name", id)));
        }
        if !ideal_frequency_days.is_finite() || ideal_frequency_days <= 0.0 {
            return Err(DomainError::InvalidChore(format!(
                "chore {} has ideal frequency {} (must be > 0 days)",
                id, ideal_frequency_days
            )));
        }

        Ok(Self {
            id,
            name,
            ideal_weather: ideal_weather
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            ideal_frequency_days,
        })
    }

    /// Whether the given condition is one of this chore's ideal conditions
    pub fn suits_weather(&self, condition: &str) -> bool {
        self.ideal_weather.contains(condition)
    }
}

impl From<String> for ChoreId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One completion of a chore by a user (append-only history)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoreCompletionRecord {
    pub chore_id: ChoreId,
    pub user_id: UserId,
    pub completed_at: DateTime<Utc>,
}

/// How much a user weighs weather fit against overdue-ness.
///
/// The two priorities are expected to sum to 1. The preference form keeps
/// that true through [`UserPreference::from_weather_priority`]; the scorer
/// itself does not check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreference {
    pub user_id: UserId,
    pub weather_priority: f64,
    pub frequency_priority: f64,
}

impl UserPreference {
    /// Create a preference with independent weights, each within [0, 1].
    pub fn new(
        user_id: UserId,
        weather_priority: f64,
        frequency_priority: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id,
            weather_priority: check_priority(weather_priority)?,
            frequency_priority: check_priority(frequency_priority)?,
        })
    }

    /// Create a preference from the weather slider; frequency gets the rest.
    pub fn from_weather_priority(
        user_id: UserId,
        weather_priority: f64,
    ) -> Result<Self, ValidationError> {
        let weather_priority = check_priority(weather_priority)?;
        Ok(Self {
            user_id,
            weather_priority,
            frequency_priority: 1.0 - weather_priority,
        })
    }

    /// Equal weighting, used when a user has not saved a preference yet
    pub fn balanced(user_id: UserId) -> Self {
        Self {
            user_id,
            weather_priority: 0.5,
            frequency_priority: 0.5,
        }
    }
}

fn check_priority(value: f64) -> Result<f64, ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::PriorityOutOfRange(value))
    }
}

/// A chore paired with its recommendation score for one scoring pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredChore {
    #[serde(flatten)]
    pub chore: Chore,
    pub score: f64,
}
