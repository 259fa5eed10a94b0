//! Prompt template for the daily activity plan

use crate::schedule::entities::UserInfo;
use crate::schedule::outing::OutingAnalysis;
use crate::weather::summary::WeatherSummary;

/// The five fixed plan categories, in the order the model must use
pub const CATEGORIES: [&str; 5] = [
    "Chores",
    "Outing preparation",
    "Air environment",
    "UV protection",
    "Clothing",
];

/// Everything the activity prompt is assembled from
#[derive(Debug, Clone, Copy)]
pub struct ActivityPromptInput<'a> {
    pub today: &'a WeatherSummary,
    pub tomorrow: &'a WeatherSummary,
    pub outings: &'a OutingAnalysis,
    pub user_info: &'a UserInfo,
    /// Language the plan should be written in, e.g. "English"
    pub response_language: &'a str,
}

/// Templates for the activity-plan prompt
pub struct ActivityPromptTemplate;

impl ActivityPromptTemplate {
    /// Opening instructions
    pub fn instructions(response_language: &str) -> String {
        format!(
            r#"Using the information below, write suggestions in {} for spending today comfortably.
Split the suggestions into the 5 categories below and give concrete bullet points for each.
Vary the suggestions according to the weather, the time of day, and how high or low the temperature and humidity are.

Do not recommend any activity, in any category, during the hours the user is out.
For example, if the user is out from 9:00 to 17:00, do not suggest laundry at 12:00; only suggest actions that can be done while the user is at home."#,
            response_language
        )
    }

    /// The fixed category list with its per-category rules
    pub fn task_template() -> String {
        format!(
            r#"[Categories]
1. {} (laundry, cleaning, etc. Follow these rules:
   - Only consider the chores the user entered; never suggest any other chore.
   - For laundry, give 1-2 concrete time windows today that are good for hanging it out, excluding the hours the user is out.
   - If laundry will dry better tomorrow, you may conclude that it is better to do the laundry tomorrow.
   - Assume every other chore is done today, during hours the user is at home.)
2. {} (things to bring and points to watch. For umbrellas, decide concretely between a regular umbrella and a folding umbrella based on the precipitation probability during the outing hours.)
3. {} (use of the air conditioner or dryer; suggest only when needed.)
4. {} (measures suited to the outing hours.)
5. {} (appropriate clothing for the heat or cold and the UV level.)"#,
            CATEGORIES[0], CATEGORIES[1], CATEGORIES[2], CATEGORIES[3], CATEGORIES[4]
        )
    }

    /// Weather for today and tomorrow followed by the outing-risk section
    pub fn weather_section(
        today: &WeatherSummary,
        tomorrow: &WeatherSummary,
        outings: &OutingAnalysis,
    ) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            today.render("today"),
            tomorrow.render("tomorrow"),
            outings.risk_section()
        )
    }

    fn bullet_list(entries: &[String]) -> String {
        if entries.is_empty() {
            return "- (none)".to_string();
        }
        entries
            .iter()
            .map(|e| format!("- {}", e))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn presence(flag: bool) -> &'static str {
        if flag { "yes" } else { "no" }
    }

    /// Assemble the full prompt
    pub fn build(input: &ActivityPromptInput<'_>) -> String {
        let info = input.user_info;
        let outing_hours = if input.outings.outing_hours.is_empty() {
            "- (no outings)".to_string()
        } else {
            input.outings.outing_hours_section()
        };

        format!(
            r#"{}

{}

# Weather
{}

# Chores
{}

# Items available for weather changes
{}

# Home equipment
- Humidifier: {}
- Air conditioner: {}
- Dryer: {}

# Outing hours today and tomorrow (avoid these hours in every category)
{}"#,
            Self::instructions(input.response_language),
            Self::task_template(),
            Self::weather_section(input.today, input.tomorrow, input.outings),
            Self::bullet_list(&info.chores),
            Self::bullet_list(&info.items),
            Self::presence(info.equipment.humidifier),
            Self::presence(info.equipment.air_conditioner),
            Self::presence(info.equipment.dryer),
            outing_hours,
        )
    }
}
