//! Typed PostgREST rows
//!
//! Rows are deserialized as-is and then converted into domain values. A row
//! that fails conversion rejects the whole read with
//! [`StoreError::MalformedRecord`] rather than being skipped.

use advisor_application::StoreError;
use advisor_domain::{Chore, ChoreCompletionRecord, ChoreId, UserId, UserPreference};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub(super) const CHORES: &str = "chores";
pub(super) const CHORE_HISTORY: &str = "chore_history";
pub(super) const USER_PREFERENCES: &str = "user_preferences";
pub(super) const SUGGESTIONS: &str = "suggestions";

/// Identifier columns may be text/uuid or integer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(super) enum RowId {
    Text(String),
    Number(i64),
}

impl From<RowId> for ChoreId {
    fn from(id: RowId) -> Self {
        match id {
            RowId::Text(s) => ChoreId::new(s),
            RowId::Number(n) => ChoreId::new(n.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoreRow {
    pub id: RowId,
    pub name: String,
    #[serde(default)]
    pub ideal_weather: Option<Vec<String>>,
    pub ideal_frequency: f64,
}

impl ChoreRow {
    pub fn into_chore(self) -> Result<Chore, StoreError> {
        Chore::new(
            ChoreId::from(self.id),
            self.name,
            self.ideal_weather.unwrap_or_default(),
            self.ideal_frequency,
        )
        .map_err(|e| malformed(CHORES, e))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct HistoryRow {
    pub chore_id: RowId,
    pub user_id: String,
    pub completed_at: String,
}

impl HistoryRow {
    pub fn into_record(self) -> Result<ChoreCompletionRecord, StoreError> {
        Ok(ChoreCompletionRecord {
            chore_id: ChoreId::from(self.chore_id),
            user_id: UserId::parse(&self.user_id).map_err(|e| malformed(CHORE_HISTORY, e))?,
            completed_at: parse_timestamp(&self.completed_at)
                .ok_or_else(|| {
                    malformed(
                        CHORE_HISTORY,
                        format!("bad completed_at '{}'", self.completed_at),
                    )
                })?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PreferenceRow {
    pub user_id: String,
    pub weather_priority: f64,
    pub frequency_priority: f64,
}

impl PreferenceRow {
    pub fn into_preference(self) -> Result<UserPreference, StoreError> {
        let user_id = UserId::parse(&self.user_id).map_err(|e| malformed(USER_PREFERENCES, e))?;
        UserPreference::new(user_id, self.weather_priority, self.frequency_priority)
            .map_err(|e| malformed(USER_PREFERENCES, e))
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NewPreferenceRow<'a> {
    pub user_id: &'a str,
    pub weather_priority: f64,
    pub frequency_priority: f64,
}

impl<'a> From<&'a UserPreference> for NewPreferenceRow<'a> {
    fn from(p: &'a UserPreference) -> Self {
        Self {
            user_id: p.user_id.as_str(),
            weather_priority: p.weather_priority,
            frequency_priority: p.frequency_priority,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct SelectionPatch<'a> {
    pub selected_chores_ids: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub(super) struct NewHistoryRow<'a> {
    pub chore_id: &'a str,
    pub user_id: &'a str,
    pub completed_at: String,
}

impl<'a> From<&'a ChoreCompletionRecord> for NewHistoryRow<'a> {
    fn from(r: &'a ChoreCompletionRecord) -> Self {
        Self {
            chore_id: r.chore_id.as_str(),
            user_id: r.user_id.as_str(),
            completed_at: r.completed_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NewSuggestionRow<'a> {
    pub user_id: &'a str,
    pub content: &'a str,
}

/// Deserialize a JSON array of rows from `table`
pub(super) fn parse_rows<T: for<'de> Deserialize<'de>>(
    table: &str,
    body: &str,
) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(body).map_err(|e| malformed(table, e))
}

pub(super) fn malformed(table: &str, reason: impl ToString) -> StoreError {
    StoreError::MalformedRecord {
        table: table.to_string(),
        reason: reason.to_string(),
    }
}

/// `timestamptz` comes back as RFC 3339; plain `timestamp` columns lack the
/// offset and are read as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
