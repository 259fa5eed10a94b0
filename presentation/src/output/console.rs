//! Console output formatter

use crate::output::formatter::OutputFormatter;
use advisor_application::{ActivitySuggestion, ChoreRecommendations};
use advisor_domain::{ChoreCompletionRecord, ChoreId, UserPreference};
use colored::Colorize;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn score_bar(score: f64) -> String {
        let filled = (score.clamp(0.0, 1.0) * 20.0).round() as usize;
        format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn chores(&self, result: &ChoreRecommendations) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Recommended Chores"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} ({:.1}°C)\n",
            "Weather:".cyan().bold(),
            result.weather.condition,
            result.weather.temperature_c
        ));

        if result.chores.is_empty() {
            output.push_str(&format!("\n{}\n", "No chores in the catalog.".dimmed()));
            return output;
        }

        output.push_str(&Self::section_header("Ranking"));
        for (rank, scored) in result.chores.iter().enumerate() {
            let score = format!("{:.2}", scored.score);
            let score = if scored.score >= 0.8 {
                score.green().bold()
            } else if scored.score >= 0.5 {
                score.yellow()
            } else {
                score.dimmed()
            };
            let weather_fit = if scored.chore.suits_weather(&result.weather.condition) {
                "good weather".green()
            } else {
                "".normal()
            };
            output.push_str(&format!(
                "{:>3}. {:<28} {} {} {}\n",
                rank + 1,
                scored.chore.name,
                Self::score_bar(scored.score),
                score,
                weather_fit
            ));
        }

        output
    }

    fn suggestion(&self, result: &ActivitySuggestion, show_prompt: bool) -> String {
        let mut output = String::new();

        if show_prompt {
            output.push_str(&Self::section_header("Prompt"));
            output.push_str(&result.prompt);
            output.push('\n');
        }

        output.push_str(&Self::header(&format!("Activity Plan for {}", result.today.date)));
        output.push('\n');
        output.push_str(&format!(
            "{} {} / {} ({:.1}°C avg)\n",
            "Today:".cyan().bold(),
            result.today.temperature_band.label(),
            result.today.humidity_band.label(),
            result.today.temperature.mean
        ));
        output.push_str(&format!(
            "{} {} / {} ({:.1}°C avg)\n",
            "Tomorrow:".cyan().bold(),
            result.tomorrow.temperature_band.label(),
            result.tomorrow.humidity_band.label(),
            result.tomorrow.temperature.mean
        ));

        let risky: Vec<_> = result
            .outings
            .assessments
            .iter()
            .filter(|a| a.is_high_risk())
            .collect();
        if !risky.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "Rain is likely while you are out:".yellow().bold()
            ));
            for assessment in risky {
                output.push_str(&format!("  {}\n", assessment.describe()));
            }
        }

        output.push_str(&Self::section_header("Suggestions"));
        output.push_str(&result.text);
        output.push('\n');

        output
    }

    fn preference(&self, preference: &UserPreference, saved: bool) -> String {
        let title = if saved { "Saved preference" } else { "Current preference" };
        format!(
            "{} for {}\n  weather   {} {:.2}\n  frequency {} {:.2}\n",
            title.green().bold(),
            preference.user_id,
            Self::score_bar(preference.weather_priority),
            preference.weather_priority,
            Self::score_bar(preference.frequency_priority),
            preference.frequency_priority
        )
    }

    fn selection(&self, chores: &[ChoreId]) -> String {
        let mut output = format!("{} ({})\n", "Selected chores".green().bold(), chores.len());
        for id in chores {
            output.push_str(&format!("  * {}\n", id));
        }
        output
    }

    fn completion(&self, record: &ChoreCompletionRecord) -> String {
        format!(
            "{} {} at {}\n",
            "v".green(),
            record.chore_id.to_string().bold(),
            record.completed_at.format("%Y-%m-%d %H:%M UTC")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::{Chore, CurrentWeather, ScoredChore, UserId};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(ConsoleFormatter::score_bar(0.0), ".".repeat(20));
        assert_eq!(ConsoleFormatter::score_bar(1.0), "#".repeat(20));
        assert_eq!(ConsoleFormatter::score_bar(0.5).matches('#').count(), 10);
        assert_eq!(ConsoleFormatter::score_bar(3.0).len(), 20);
    }

    #[test]
    fn test_chores_listing() {
        plain();
        let result = ChoreRecommendations {
            weather: CurrentWeather::new("Clear", 26.0),
            chores: vec![
                ScoredChore {
                    chore: Chore::new("l", "Laundry", ["clear"], 2.0).unwrap(),
                    score: 1.0,
                },
                ScoredChore {
                    chore: Chore::new("v", "Vacuum", ["rain"], 3.0).unwrap(),
                    score: 0.42,
                },
            ],
        };

        let text = ConsoleFormatter.chores(&result);
        assert!(text.contains("Weather: clear (26.0°C)"));
        let laundry = text.find("Laundry").unwrap();
        let vacuum = text.find("Vacuum").unwrap();
        assert!(laundry < vacuum);
        assert!(text.contains("0.42"));
    }

    #[test]
    fn test_empty_catalog() {
        plain();
        let result = ChoreRecommendations {
            weather: CurrentWeather::new("rain", 18.0),
            chores: vec![],
        };
        assert!(ConsoleFormatter.chores(&result).contains("No chores in the catalog."));
    }

    #[test]
    fn test_preference() {
        plain();
        let pref = UserPreference::from_weather_priority(UserId::parse("bob").unwrap(), 0.3).unwrap();
        let text = ConsoleFormatter.preference(&pref, false);
        assert!(text.starts_with("Current preference for bob"));
        assert!(text.contains("0.70"));
    }
}
