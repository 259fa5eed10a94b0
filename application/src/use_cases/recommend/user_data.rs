//! Per-user writes: preferences, chore selection, completions, suggestions.
//!
//! Every operation takes the raw session identifier and validates it before
//! touching the store, so an anonymous session never causes a partial write.

use super::RecommendationOrchestrator;
use super::types::RecommendationError;
use advisor_domain::{ChoreCompletionRecord, ChoreId, UserId, UserPreference};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{info, warn};

impl RecommendationOrchestrator {
    fn require_user(session_user: Option<&str>) -> Result<UserId, RecommendationError> {
        UserId::from_session(session_user).map_err(|e| {
            warn!("Rejected write without a signed-in user");
            RecommendationError::from(e)
        })
    }

    /// Save the weather priority; frequency priority becomes `1 - weather`.
    pub async fn save_preference(
        &self,
        session_user: Option<&str>,
        weather_priority: f64,
    ) -> Result<UserPreference, RecommendationError> {
        let user_id = Self::require_user(session_user)?;
        let preference = UserPreference::from_weather_priority(user_id, weather_priority)?;

        self.store.set_user_preference(&preference).await?;
        info!(
            "Saved preference for {} (weather {:.2}, frequency {:.2})",
            preference.user_id, preference.weather_priority, preference.frequency_priority
        );
        Ok(preference)
    }

    /// The user's saved preference, or an even split when none is stored
    pub async fn load_preference(
        &self,
        session_user: Option<&str>,
    ) -> Result<UserPreference, RecommendationError> {
        let user_id = Self::require_user(session_user)?;
        let stored = self.store.get_user_preference(&user_id).await?;
        Ok(stored.unwrap_or_else(|| UserPreference::balanced(user_id)))
    }

    /// Persist a generated suggestion for the user
    pub async fn save_suggestion(
        &self,
        session_user: Option<&str>,
        text: &str,
    ) -> Result<(), RecommendationError> {
        let user_id = Self::require_user(session_user)?;
        self.store.insert_suggestion(&user_id, text).await?;
        info!("Saved suggestion for {}", user_id);
        Ok(())
    }

    /// Replace the chores the user tracks; duplicate ids are dropped.
    pub async fn save_chore_selection(
        &self,
        session_user: Option<&str>,
        chore_ids: &[ChoreId],
    ) -> Result<Vec<ChoreId>, RecommendationError> {
        let user_id = Self::require_user(session_user)?;

        let mut seen = HashSet::new();
        let selection: Vec<ChoreId> = chore_ids
            .iter()
            .filter(|id| seen.insert(*id))
            .cloned()
            .collect();

        self.store.set_chore_selection(&user_id, &selection).await?;
        info!("Saved {} selected chores for {}", selection.len(), user_id);
        Ok(selection)
    }

    /// Append a completion of `chore_id` at `completed_at`
    pub async fn record_completion(
        &self,
        session_user: Option<&str>,
        chore_id: ChoreId,
        completed_at: DateTime<Utc>,
    ) -> Result<ChoreCompletionRecord, RecommendationError> {
        let user_id = Self::require_user(session_user)?;
        let record = ChoreCompletionRecord {
            chore_id,
            user_id,
            completed_at,
        };

        self.store.insert_completion(&record).await?;
        info!(
            "Recorded completion of {} by {}",
            record.chore_id, record.user_id
        );
        Ok(record)
    }
}
