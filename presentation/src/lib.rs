//! Presentation layer for chore-advisor
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters and household profile loading.

pub mod cli;
pub mod output;
pub mod profile;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;
pub use profile::{ProfileError, load_profile};
pub use progress::reporter::ProgressReporter;
