//! Process-local record store

use advisor_application::{RecordStore, StoreError};
use advisor_domain::{Chore, ChoreCompletionRecord, ChoreId, UserId, UserPreference};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryState {
    chores: Vec<Chore>,
    history: Vec<ChoreCompletionRecord>,
    preferences: HashMap<UserId, UserPreference>,
    selections: HashMap<UserId, Vec<ChoreId>>,
    suggestions: Vec<(UserId, String)>,
}

/// [`RecordStore`] holding everything in memory.
///
/// Used for local runs without a database and by tests. Nothing survives
/// the process.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    state: RwLock<MemoryState>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chores(chores: Vec<Chore>) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                chores,
                ..MemoryState::default()
            }),
        }
    }

    /// Chores the user selected, in the order they were saved
    pub async fn selection(&self, user_id: &UserId) -> Vec<ChoreId> {
        self.state
            .read()
            .await
            .selections
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Suggestions saved for the user, oldest first
    pub async fn suggestions(&self, user_id: &UserId) -> Vec<String> {
        self.state
            .read()
            .await
            .suggestions
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, text)| text.clone())
            .collect()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get_chores(&self) -> Result<Vec<Chore>, StoreError> {
        Ok(self.state.read().await.chores.clone())
    }

    async fn get_completion_history(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ChoreCompletionRecord>, StoreError> {
        let state = self.state.read().await;
        let mut records: Vec<_> = state
            .history
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(records)
    }

    async fn get_user_preference(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserPreference>, StoreError> {
        Ok(self.state.read().await.preferences.get(user_id).cloned())
    }

    async fn set_user_preference(&self, preference: &UserPreference) -> Result<(), StoreError> {
        self.state
            .write()
            .await
            .preferences
            .insert(preference.user_id.clone(), preference.clone());
        Ok(())
    }

    async fn insert_suggestion(&self, user_id: &UserId, text: &str) -> Result<(), StoreError> {
        self.state
            .write()
            .await
            .suggestions
            .push((user_id.clone(), text.to_string()));
        Ok(())
    }

    async fn set_chore_selection(
        &self,
        user_id: &UserId,
        chore_ids: &[ChoreId],
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if let Some(unknown) = chore_ids
            .iter()
            .find(|id| !state.chores.iter().any(|c| &c.id == *id))
        {
            return Err(StoreError::Other(format!("unknown chore '{}'", unknown)));
        }
        state.selections.insert(user_id.clone(), chore_ids.to_vec());
        Ok(())
    }

    async fn insert_completion(&self, record: &ChoreCompletionRecord) -> Result<(), StoreError> {
        self.state.write().await.history.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(id: &str) -> UserId {
        UserId::parse(id).unwrap()
    }

    fn store() -> InMemoryRecordStore {
        InMemoryRecordStore::with_chores(vec![
            Chore::new("laundry", "Laundry", ["clear"], 2.0).unwrap(),
            Chore::new("vacuum", "Vacuum", ["rain"], 3.0).unwrap(),
        ])
    }

    #[tokio::test]
    async fn test_history_is_per_user() {
        let store = store();
        let at = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
        for owner in ["alice", "bob", "alice"] {
            store
                .insert_completion(&ChoreCompletionRecord {
                    chore_id: ChoreId::from("laundry"),
                    user_id: user(owner),
                    completed_at: at,
                })
                .await
                .unwrap();
        }

        assert_eq!(store.get_completion_history(&user("alice")).await.unwrap().len(), 2);
        assert_eq!(store.get_completion_history(&user("bob")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_history_is_newest_first() {
        let store = store();
        for day in [1, 5, 3] {
            store
                .insert_completion(&ChoreCompletionRecord {
                    chore_id: ChoreId::from("laundry"),
                    user_id: user("alice"),
                    completed_at: Utc.with_ymd_and_hms(2025, 7, day, 9, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

        let days: Vec<String> = store
            .get_completion_history(&user("alice"))
            .await
            .unwrap()
            .iter()
            .map(|r| r.completed_at.format("%d").to_string())
            .collect();
        assert_eq!(days, vec!["05", "03", "01"]);
    }

    #[tokio::test]
    async fn test_preference_is_replaced() {
        let store = store();
        assert!(store.get_user_preference(&user("alice")).await.unwrap().is_none());

        for weather in [0.2, 0.9] {
            let pref = UserPreference::from_weather_priority(user("alice"), weather).unwrap();
            store.set_user_preference(&pref).await.unwrap();
        }

        let stored = store.get_user_preference(&user("alice")).await.unwrap().unwrap();
        assert_eq!(stored.weather_priority, 0.9);
    }

    #[tokio::test]
    async fn test_selection_rejects_unknown_chores() {
        let store = store();
        let ok = [ChoreId::from("vacuum"), ChoreId::from("laundry")];
        store.set_chore_selection(&user("alice"), &ok).await.unwrap();
        assert_eq!(store.selection(&user("alice")).await, ok.to_vec());

        let err = store
            .set_chore_selection(&user("alice"), &[ChoreId::from("dishes")])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Other(_)));
        // Previous selection is kept
        assert_eq!(store.selection(&user("alice")).await.len(), 2);
    }

    #[tokio::test]
    async fn test_suggestions_are_appended() {
        let store = store();
        store.insert_suggestion(&user("alice"), "first").await.unwrap();
        store.insert_suggestion(&user("bob"), "other").await.unwrap();
        store.insert_suggestion(&user("alice"), "second").await.unwrap();

        assert_eq!(store.suggestions(&user("alice")).await, vec!["first", "second"]);
    }
}
