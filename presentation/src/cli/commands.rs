//! CLI command definitions

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for chore-advisor
#[derive(Parser, Debug)]
#[command(name = "chore-advisor")]
#[command(author, version, about = "Weather-aware chore ranking and daily activity suggestions")]
#[command(long_about = r#"
Chore Advisor ranks household chores by how well today's weather suits them
and how overdue they are, and asks a language model for a daily activity
plan that avoids the hours you are out.

Configuration files are loaded from (in priority order):
1. --config <path>              Explicit config file
2. ./chore-advisor.toml         Project-level config
3. ~/.config/chore-advisor/config.toml   Global config

The default record store is in memory: preferences, selections and
completions last only for one command. Set [store] backend = "postgrest"
to keep them between runs.

Example:
  chore-advisor --user alice prefs --weather 0.7
  chore-advisor --user alice chores
  chore-advisor suggest --profile household.toml
  chore-advisor --user alice done laundry
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Signed-in user id (required by commands that read or write user data)
    #[arg(short, long, global = true, value_name = "ID")]
    pub user: Option<String>,

    /// Output format (defaults to the config file's, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Rank chores against the current weather and your history
    Chores {
        /// City for current weather (overrides [location].city)
        #[arg(long)]
        city: Option<String>,

        /// Weather priority for this run only; frequency gets the rest
        #[arg(long, value_name = "0..1")]
        weather_priority: Option<f64>,
    },

    /// Ask for today's activity plan from a household profile
    Suggest {
        /// TOML file with chores, items, equipment and outing schedule
        #[arg(short, long, value_name = "PATH")]
        profile: PathBuf,

        /// Day to plan (YYYY-MM-DD, defaults to today at the forecast location)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Save the suggestion for the signed-in user
        #[arg(long)]
        save: bool,

        /// Print the prompt sent to the model
        #[arg(long)]
        show_prompt: bool,
    },

    /// Show or save your weather/frequency preference
    Prefs {
        /// Weight of weather fit (0..1); frequency becomes 1 - weather
        #[arg(long, value_name = "0..1")]
        weather: Option<f64>,
    },

    /// Choose which chores you track
    Select {
        /// Chore ids
        #[arg(required = true, value_name = "CHORE_ID")]
        chores: Vec<String>,
    },

    /// Record that you completed a chore
    Done {
        /// Chore id
        #[arg(value_name = "CHORE_ID")]
        chore: String,

        /// Completion time (RFC 3339, defaults to now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
}
