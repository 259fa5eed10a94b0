//! Output formatter trait

use crate::cli::commands::OutputFormat;
use advisor_application::{ActivitySuggestion, ChoreRecommendations};
use advisor_domain::{ChoreCompletionRecord, ChoreId, UserPreference};

/// Trait for formatting command results
pub trait OutputFormatter {
    fn chores(&self, result: &ChoreRecommendations) -> String;

    /// `show_prompt` also prints the prompt sent to the model
    fn suggestion(&self, result: &ActivitySuggestion, show_prompt: bool) -> String;

    fn preference(&self, preference: &UserPreference, saved: bool) -> String;

    fn selection(&self, chores: &[ChoreId]) -> String;

    fn completion(&self, record: &ChoreCompletionRecord) -> String;
}

/// Pick the formatter for `format`
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter),
    }
}
