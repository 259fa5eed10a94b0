//! Language model configuration from TOML (`[llm]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completions settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Base URL, e.g. `https://api.openai.com/v1` (can point at a compatible server)
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub timeout_seconds: u64,
    /// Language the model is asked to answer in
    pub response_language: String,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 600,
            temperature: 0.7,
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_seconds: 60,
            response_language: "English".to_string(),
        }
    }
}
