//! Configuration file loading for chore-advisor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./chore-advisor.toml` or `./.chore-advisor.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/chore-advisor/config.toml`
//! 4. Fallback: `~/.config/chore-advisor/config.toml`
//! 5. Default values
//!
//! Secrets are not read from files; [`CredentialResolver`] reads them from
//! the environment variables the config names.

mod credentials;
mod error;
mod file_config;
mod loader;

pub use credentials::{CredentialResolver, StoreCredentials};
pub use error::ConfigError;
pub use file_config::{
    FileChoreConfig, FileConfig, FileLlmConfig, FileLocationConfig, FileOutputConfig,
    FileOutputFormat, FileStoreConfig, FileWeatherConfig, StoreBackend,
};
pub use loader::ConfigLoader;
