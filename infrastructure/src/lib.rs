//! Infrastructure layer for chore-advisor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod llm;
pub mod store;
pub mod weather;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, CredentialResolver, FileConfig, FileOutputFormat, StoreBackend,
    StoreCredentials,
};
pub use llm::OpenAiCompletionGateway;
pub use store::{InMemoryRecordStore, PostgrestStore};
pub use weather::HttpWeatherProvider;
