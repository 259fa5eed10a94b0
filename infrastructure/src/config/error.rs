//! Configuration errors
//!
//! All of these are fatal at startup: they are reported before any request
//! reaches the weather provider, the language model or the store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("{field}: {message}")]
    Invalid { field: String, message: String },

    #[error("Environment variable {var} is not set (required for {purpose})")]
    MissingCredential { var: String, purpose: &'static str },
}
