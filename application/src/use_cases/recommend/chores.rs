//! Chore-scoring pipeline.

use super::types::{ChoreRecommendations, ChoreRequest, RecommendationError};
use super::{RecommendationOrchestrator, bounded, run_step};
use crate::ports::progress::{ProgressNotifier, Step};
use crate::ports::weather_provider::WeatherError;
use advisor_domain::ChoreScorer;
use tracing::{debug, info};

impl RecommendationOrchestrator {
    /// Current weather → catalog + history → ranked chores.
    ///
    /// If either the catalog or the history fails to load, the whole pass
    /// fails. Scoring against an empty history would make every chore look
    /// maximally overdue.
    pub(super) async fn recommend_chores(
        &self,
        request: ChoreRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<ChoreRecommendations, RecommendationError> {
        let user_id = &request.preference.user_id;

        let weather = run_step(
            progress,
            Step::FetchWeather,
            bounded(
                self.params.weather_timeout,
                WeatherError::Timeout,
                self.weather.current_weather(&request.location),
            ),
        )
        .await?;
        debug!(
            "Current weather in {}: {} ({:.1}°C)",
            request.location, weather.condition, weather.temperature_c
        );

        let (chores, history) = run_step(progress, Step::LoadChores, async {
            let chores = self.store.get_chores().await?;
            let history = self.store.get_completion_history(user_id).await?;
            Ok::<_, RecommendationError>((chores, history))
        })
        .await?;
        debug!(
            "Loaded {} chores and {} completion records for {}",
            chores.len(),
            history.len(),
            user_id
        );

        let ranked = run_step(progress, Step::Score, async {
            let scorer = ChoreScorer::new(&request.preference, &weather.condition, request.now);
            Ok::<_, RecommendationError>(scorer.rank(chores, &history))
        })
        .await?;
        info!("Ranked {} chores for {}", ranked.len(), user_id);

        Ok(ChoreRecommendations {
            weather,
            chores: ranked,
        })
    }
}
