//! Supabase / PostgREST record store
//!
//! Tables: `chores`, `chore_history`, `user_preferences`, `suggestions`.

use super::rows::{
    CHORE_HISTORY, CHORES, ChoreRow, HistoryRow, NewHistoryRow, NewPreferenceRow,
    NewSuggestionRow, PreferenceRow, SUGGESTIONS, SelectionPatch, USER_PREFERENCES, parse_rows,
};
use advisor_application::{RecordStore, StoreError};
use advisor_domain::{Chore, ChoreCompletionRecord, ChoreId, UserId, UserPreference};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use tracing::{debug, warn};

/// [`RecordStore`] over the PostgREST HTTP interface
pub struct PostgrestStore {
    client: Client,
    rest_url: String,
    api_key: String,
}

impl PostgrestStore {
    /// `project_url` is the Supabase project URL; `/rest/v1` is appended.
    pub fn new(client: Client, project_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(&self, table: &str, request: RequestBuilder) -> Result<String, StoreError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            warn!("{} request failed with HTTP {}", table, status.as_u16());
            return Err(StoreError::RequestFailed {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }
        Ok(body)
    }

    async fn select(&self, table: &str, query: &[(&str, String)]) -> Result<String, StoreError> {
        let request = self.client.get(self.table_url(table)).query(query);
        self.send(table, request).await
    }

    async fn insert<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<(), StoreError> {
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(&[row]);
        self.send(table, request).await.map(|_| ())
    }
}

#[async_trait]
impl RecordStore for PostgrestStore {
    async fn get_chores(&self) -> Result<Vec<Chore>, StoreError> {
        let body = self.select(CHORES, &[("select", "*".to_string())]).await?;
        let chores = parse_rows::<ChoreRow>(CHORES, &body)?
            .into_iter()
            .map(ChoreRow::into_chore)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Loaded {} chores", chores.len());
        Ok(chores)
    }

    async fn get_completion_history(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ChoreCompletionRecord>, StoreError> {
        let body = self
            .select(
                CHORE_HISTORY,
                &[
                    ("select", "*".to_string()),
                    ("user_id", eq(user_id.as_str())),
                    ("order", "completed_at.desc".to_string()),
                ],
            )
            .await?;
        parse_rows::<HistoryRow>(CHORE_HISTORY, &body)?
            .into_iter()
            .map(HistoryRow::into_record)
            .collect()
    }

    async fn get_user_preference(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserPreference>, StoreError> {
        let body = self
            .select(
                USER_PREFERENCES,
                &[
                    ("select", "user_id,weather_priority,frequency_priority".to_string()),
                    ("user_id", eq(user_id.as_str())),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        parse_rows::<PreferenceRow>(USER_PREFERENCES, &body)?
            .into_iter()
            .next()
            .map(PreferenceRow::into_preference)
            .transpose()
    }

    async fn set_user_preference(&self, preference: &UserPreference) -> Result<(), StoreError> {
        let request = self
            .client
            .post(self.table_url(USER_PREFERENCES))
            .query(&[("on_conflict", "user_id")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[NewPreferenceRow::from(preference)]);
        self.send(USER_PREFERENCES, request).await.map(|_| ())
    }

    async fn insert_suggestion(&self, user_id: &UserId, text: &str) -> Result<(), StoreError> {
        self.insert(
            SUGGESTIONS,
            &NewSuggestionRow {
                user_id: user_id.as_str(),
                content: text,
            },
        )
        .await
    }

    async fn set_chore_selection(
        &self,
        user_id: &UserId,
        chore_ids: &[ChoreId],
    ) -> Result<(), StoreError> {
        let patch = SelectionPatch {
            selected_chores_ids: chore_ids.iter().map(ChoreId::as_str).collect(),
        };
        let request = self
            .client
            .patch(self.table_url(USER_PREFERENCES))
            .query(&[("user_id", eq(user_id.as_str()))])
            .header("Prefer", "return=minimal")
            .json(&patch);
        self.send(USER_PREFERENCES, request).await.map(|_| ())
    }

    async fn insert_completion(&self, record: &ChoreCompletionRecord) -> Result<(), StoreError> {
        self.insert(CHORE_HISTORY, &NewHistoryRow::from(record)).await
    }
}

/// PostgREST equality filter value
fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

/// PostgREST errors look like `{"code": "...", "message": "...", ...}`
fn error_message(body: &str, reason: Option<&str>) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| reason.unwrap_or("Unknown").to_string())
}
