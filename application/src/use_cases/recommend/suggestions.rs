//! Activity-suggestion pipeline.

use super::types::{ActivitySuggestion, RecommendationError, SuggestionRequest};
use super::{RecommendationOrchestrator, bounded, run_step};
use crate::ports::llm_gateway::SuggestionError;
use crate::ports::progress::{ProgressNotifier, Step};
use crate::ports::weather_provider::WeatherError;
use advisor_domain::{ActivityPromptInput, ActivityPromptTemplate, OutingAnalysis, WeatherSummary};
use tracing::{debug, info};

impl RecommendationOrchestrator {
    /// Forecast → summaries + outing analysis → prompt → model reply.
    ///
    /// The model is called at most once; failures are returned to the
    /// caller, who may re-invoke the action.
    pub(super) async fn suggest_activities(
        &self,
        request: SuggestionRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<ActivitySuggestion, RecommendationError> {
        let forecast = run_step(
            progress,
            Step::FetchWeather,
            bounded(
                self.params.weather_timeout,
                WeatherError::Timeout,
                self.weather.forecast(request.latitude, request.longitude),
            ),
        )
        .await?;
        debug!(
            "Forecast has {} hourly samples and {} daily entries",
            forecast.hourly.len(),
            forecast.daily.len()
        );

        let (today, tomorrow) = request.plan_days(&forecast)?;

        let (today_summary, tomorrow_summary, outings, prompt) =
            run_step(progress, Step::BuildPrompt, async {
                let today_summary = WeatherSummary::for_date(
                    &forecast.hourly,
                    today,
                    forecast.uv_index_max(today),
                )?;
                let tomorrow_summary = WeatherSummary::for_date(
                    &forecast.hourly,
                    tomorrow,
                    forecast
                        .uv_index_max(tomorrow)
                        .or_else(|| forecast.uv_index_max(today)),
                )?;
                let outings = OutingAnalysis::analyze(&request.user_info.schedule, &forecast.hourly);

                let prompt = ActivityPromptTemplate::build(&ActivityPromptInput {
                    today: &today_summary,
                    tomorrow: &tomorrow_summary,
                    outings: &outings,
                    user_info: &request.user_info,
                    response_language: &self.params.response_language,
                });
                Ok::<_, RecommendationError>((today_summary, tomorrow_summary, outings, prompt))
            })
            .await?;
        debug!("Activity prompt:\n{}", prompt);

        let reply = run_step(
            progress,
            Step::Generate,
            bounded(
                self.params.suggestion_timeout,
                SuggestionError::Timeout,
                self.gateway.complete(&prompt),
            ),
        )
        .await?;

        let text = reply.trim();
        if text.is_empty() {
            return Err(SuggestionError::EmptyResponse.into());
        }
        info!(
            "Received activity suggestion ({} chars)",
            text.chars().count()
        );

        Ok(ActivitySuggestion {
            text: text.to_string(),
            prompt,
            today: today_summary,
            tomorrow: tomorrow_summary,
            outings,
        })
    }
}
