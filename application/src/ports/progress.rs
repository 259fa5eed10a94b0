//! Progress notification port
//!
//! Defines the interface for reporting progress while a recommendation is
//! being computed, so the presentation layer can show a loading state.

use serde::Serialize;

/// Steps of a recommendation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    FetchWeather,
    LoadChores,
    Score,
    BuildPrompt,
    Generate,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::FetchWeather => "Fetching weather",
            Step::LoadChores => "Loading chores and history",
            Step::Score => "Scoring chores",
            Step::BuildPrompt => "Building prompt",
            Step::Generate => "Generating suggestions",
        }
    }
}

/// Callback for progress updates
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a step starts
    fn on_step_start(&self, step: Step);

    /// Called when a step ends
    fn on_step_complete(&self, step: Step, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_step_start(&self, _step: Step) {}
    fn on_step_complete(&self, _step: Step, _success: bool) {}
}
