//! Record store port
//!
//! Defines the interface for the persistent store holding chores,
//! completion history, preferences and saved suggestions.

use advisor_domain::{Chore, ChoreCompletionRecord, ChoreId, UserId, UserPreference};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed record in '{table}': {reason}")]
    MalformedRecord { table: String, reason: String },

    #[error("Other error: {0}")]
    Other(String),
}

/// Store for chores, history, preferences and suggestions
///
/// Implementations (adapters) live in the infrastructure layer. Rows must be
/// converted into validated domain types at this boundary; a row that cannot
/// be converted is reported as [`StoreError::MalformedRecord`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The full chore catalog
    async fn get_chores(&self) -> Result<Vec<Chore>, StoreError>;

    /// Completion history for a user, most recent first
    async fn get_completion_history(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ChoreCompletionRecord>, StoreError>;

    /// The user's saved preference, if any
    async fn get_user_preference(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserPreference>, StoreError>;

    /// Create or replace the user's preference
    async fn set_user_preference(&self, preference: &UserPreference) -> Result<(), StoreError>;

    /// Save a generated activity suggestion
    async fn insert_suggestion(&self, user_id: &UserId, text: &str) -> Result<(), StoreError>;

    /// Replace the set of chores the user tracks
    async fn set_chore_selection(
        &self,
        user_id: &UserId,
        chore_ids: &[ChoreId],
    ) -> Result<(), StoreError>;

    /// Append a completion to the history
    async fn insert_completion(&self, record: &ChoreCompletionRecord) -> Result<(), StoreError>;
}
