//! LLM Gateway port
//!
//! Defines the interface for asking a language model to complete a prompt.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while requesting a suggestion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SuggestionError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Model returned an empty suggestion")]
    EmptyResponse,

    #[error("Model request timed out")]
    Timeout,
}

/// Gateway for single-shot LLM completions
///
/// Calls are cost-bearing: callers must not retry automatically.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send one prompt and return the model's reply text
    async fn complete(&self, prompt: &str) -> Result<String, SuggestionError>;
}
