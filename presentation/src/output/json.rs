//! JSON output

use crate::output::formatter::OutputFormatter;
use advisor_application::{ActivitySuggestion, ChoreRecommendations};
use advisor_domain::{ChoreCompletionRecord, ChoreId, UserPreference};
use serde::Serialize;
use serde_json::json;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

impl OutputFormatter for JsonFormatter {
    fn chores(&self, result: &ChoreRecommendations) -> String {
        pretty(result)
    }

    fn suggestion(&self, result: &ActivitySuggestion, show_prompt: bool) -> String {
        if show_prompt {
            return pretty(result);
        }
        pretty(&json!({
            "today": result.today.date,
            "tomorrow": result.tomorrow.date,
            "high_precipitation_during_outings": result.outings.has_high_risk(),
            "text": result.text,
        }))
    }

    fn preference(&self, preference: &UserPreference, saved: bool) -> String {
        pretty(&json!({ "saved": saved, "preference": preference }))
    }

    fn selection(&self, chores: &[ChoreId]) -> String {
        pretty(&json!({ "selected": chores }))
    }

    fn completion(&self, record: &ChoreCompletionRecord) -> String {
        pretty(record)
    }
}
