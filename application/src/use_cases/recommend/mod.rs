//! Recommendation use case.
//!
//! [`RecommendationOrchestrator`] runs one of two independent pipelines,
//! selected by the [`RecommendationRequest`] variant:
//!
//! 1. **Chores**: current weather → chore catalog + completion history →
//!    score and rank
//! 2. **Suggestions**: forecast → daily summaries + outing analysis →
//!    prompt → language model
//!
//! Requests are pull-based. Each call takes a ticket from a per-mode
//! counter, and a result is only returned if no newer request of the same
//! mode started while it was in flight.

mod chores;
mod suggestions;
#[cfg(test)]
mod test_support;
mod types;
mod user_data;

pub use types::{
    ActivitySuggestion, ChoreRecommendations, ChoreRequest, RecommendationError,
    RecommendationMode, RecommendationOutput, RecommendationRequest, SuggestionRequest,
};

use crate::config::ExecutionParams;
use crate::ports::llm_gateway::CompletionGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier, Step};
use crate::ports::record_store::RecordStore;
use crate::ports::weather_provider::WeatherProvider;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Monotonic request identity for one pipeline
#[derive(Debug, Default)]
struct RequestCounter {
    latest: AtomicU64,
}

impl RequestCounter {
    /// Start a new request; it becomes the current one
    fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, request_id: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == request_id
    }
}

/// Use case computing chore rankings and activity suggestions.
pub struct RecommendationOrchestrator {
    store: Arc<dyn RecordStore>,
    weather: Arc<dyn WeatherProvider>,
    gateway: Arc<dyn CompletionGateway>,
    params: ExecutionParams,
    chore_requests: Arc<RequestCounter>,
    suggestion_requests: Arc<RequestCounter>,
}

impl Clone for RecommendationOrchestrator {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            weather: self.weather.clone(),
            gateway: self.gateway.clone(),
            params: self.params.clone(),
            chore_requests: self.chore_requests.clone(),
            suggestion_requests: self.suggestion_requests.clone(),
        }
    }
}

impl RecommendationOrchestrator {
    pub fn new(
        store: Arc<dyn RecordStore>,
        weather: Arc<dyn WeatherProvider>,
        gateway: Arc<dyn CompletionGateway>,
    ) -> Self {
        Self {
            store,
            weather,
            gateway,
            params: ExecutionParams::default(),
            chore_requests: Arc::new(RequestCounter::default()),
            suggestion_requests: Arc::new(RequestCounter::default()),
        }
    }

    /// Create with custom execution parameters.
    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    /// Execute with default (no-op) progress
    pub async fn execute(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationOutput, RecommendationError> {
        self.compute_recommendations(request, &NoProgress).await
    }

    /// Run the pipeline selected by `request`.
    ///
    /// Returns [`RecommendationError::Superseded`] when a newer request of
    /// the same mode was started before this one finished.
    pub async fn compute_recommendations(
        &self,
        request: RecommendationRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<RecommendationOutput, RecommendationError> {
        let mode = request.mode();
        let counter = match mode {
            RecommendationMode::Chores => &self.chore_requests,
            RecommendationMode::Suggestions => &self.suggestion_requests,
        };
        let request_id = counter.begin();
        info!("Starting {} request #{}", mode, request_id);

        let result = match request {
            RecommendationRequest::Chores(request) => self
                .recommend_chores(request, progress)
                .await
                .map(RecommendationOutput::Chores),
            RecommendationRequest::Suggestions(request) => self
                .suggest_activities(request, progress)
                .await
                .map(RecommendationOutput::Suggestions),
        };

        if !counter.is_current(request_id) {
            debug!("Discarding stale {} request #{}", mode, request_id);
            return Err(RecommendationError::Superseded { mode, request_id });
        }

        result
    }
}

/// Report `step` around `fut`
async fn run_step<T, E, F>(progress: &dyn ProgressNotifier, step: Step, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    progress.on_step_start(step);
    let result = fut.await;
    progress.on_step_complete(step, result.is_ok());
    result
}

/// Bound `fut` by `limit`, mapping expiry to `on_timeout`
async fn bounded<T, E, F>(limit: Duration, on_timeout: E, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(on_timeout),
    }
}
