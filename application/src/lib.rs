//! Application layer for chore-advisor
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    llm_gateway::{CompletionGateway, SuggestionError},
    progress::{NoProgress, ProgressNotifier, Step},
    record_store::{RecordStore, StoreError},
    weather_provider::{WeatherError, WeatherProvider},
};
pub use use_cases::recommend::{
    ActivitySuggestion, ChoreRecommendations, ChoreRequest, RecommendationError,
    RecommendationMode, RecommendationOrchestrator, RecommendationOutput, RecommendationRequest,
    SuggestionRequest,
};
