//! CLI entrypoint for Chore Advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use advisor_application::{
    ChoreRequest, CompletionGateway, ProgressNotifier, RecommendationOrchestrator,
    RecommendationOutput, RecommendationRequest, RecordStore, SuggestionRequest, WeatherProvider,
};
use advisor_domain::{ChoreId, UserId, UserPreference};
use advisor_infrastructure::{
    ConfigError, ConfigLoader, CredentialResolver, FileConfig, FileOutputFormat,
    HttpWeatherProvider, InMemoryRecordStore, OpenAiCompletionGateway, PostgrestStore,
    StoreBackend,
};
use advisor_presentation::{
    Cli, Command, OutputFormat, OutputFormatter, ProgressReporter, formatter_for, load_profile,
    output::set_color_enabled,
};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// External services a command talks to; credentials are resolved only for these
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Needs {
    current_weather: bool,
    model: bool,
    store: bool,
}

impl Needs {
    fn of(command: &Command) -> Self {
        match command {
            Command::Chores { .. } => Self {
                current_weather: true,
                model: false,
                store: true,
            },
            Command::Suggest { save, .. } => Self {
                current_weather: false,
                model: true,
                store: *save,
            },
            Command::Prefs { .. } | Command::Select { .. } | Command::Done { .. } => Self {
                current_weather: false,
                model: false,
                store: true,
            },
        }
    }
}

/// Notice printed when the command's writes or history will not outlive the process
fn memory_store_notice(config: &FileConfig, command: &Command) -> Option<&'static str> {
    if config.store.backend != StoreBackend::Memory || !Needs::of(command).store {
        return None;
    }
    Some(match command {
        Command::Chores { .. } => {
            "Note: in-memory store; chores are scored without completion history or saved \
             preferences. Set [store] backend = \"postgrest\" to keep data between runs."
        }
        _ => {
            "Note: in-memory store; this change is lost when the command exits. \
             Set [store] backend = \"postgrest\" to keep data between runs."
        }
    })
}

/// Resolve a credential only when the command needs it
fn credential_if(
    needed: bool,
    resolve: impl FnOnce() -> Result<String, ConfigError>,
) -> Result<String, ConfigError> {
    if needed { resolve() } else { Ok(String::new()) }
}

fn http_client(timeout_seconds: u64) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?)
}

fn build_store(
    config: &FileConfig,
    resolver: &CredentialResolver<fn(&str) -> Option<String>>,
    needs: Needs,
) -> Result<Arc<dyn RecordStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            if needs.store {
                debug!("Using the in-memory record store");
            }
            Ok(Arc::new(InMemoryRecordStore::with_chores(
                config.store.catalog()?,
            )))
        }
        StoreBackend::Postgrest => {
            let client = http_client(config.store.timeout_seconds)?;
            if !needs.store {
                // Not called by this command; skip credential lookup
                return Ok(Arc::new(PostgrestStore::new(client, "", "")));
            }
            let creds = resolver.store_credentials(config)?;
            Ok(Arc::new(PostgrestStore::new(client, &creds.url, creds.api_key)))
        }
    }
}

fn build_orchestrator(config: &FileConfig, needs: Needs) -> Result<RecommendationOrchestrator> {
    let resolver = CredentialResolver::from_env();
    let weather_key = credential_if(needs.current_weather, || resolver.weather_api_key(config))?;
    let llm_key = credential_if(needs.model, || resolver.llm_api_key(config))?;

    // === Dependency Injection ===
    let weather: Arc<dyn WeatherProvider> = Arc::new(
        HttpWeatherProvider::new(
            http_client(config.weather.timeout_seconds)?,
            &config.weather.current_url,
            &config.weather.forecast_url,
            weather_key,
        )
        .with_forecast_days(config.weather.forecast_days),
    );

    let gateway: Arc<dyn CompletionGateway> = Arc::new(
        OpenAiCompletionGateway::new(
            http_client(config.llm.timeout_seconds)?,
            &config.llm.base_url,
            llm_key,
        )
        .with_model(&config.llm.model)
        .with_max_tokens(config.llm.max_tokens)
        .with_temperature(config.llm.temperature),
    );

    let store = build_store(config, &resolver, needs)?;

    Ok(RecommendationOrchestrator::new(store, weather, gateway)
        .with_params(config.execution_params()))
}

async fn recommend(
    orchestrator: &RecommendationOrchestrator,
    request: RecommendationRequest,
    quiet: bool,
) -> Result<RecommendationOutput> {
    let output = if quiet {
        orchestrator.execute(request).await?
    } else {
        let progress = ProgressReporter::new();
        orchestrator
            .compute_recommendations(request, &progress as &dyn ProgressNotifier)
            .await?
    };
    Ok(output)
}

async fn run(
    command: Command,
    cli_user: Option<&str>,
    quiet: bool,
    config: &FileConfig,
    orchestrator: &RecommendationOrchestrator,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    match command {
        Command::Chores {
            city,
            weather_priority,
        } => {
            let preference = match weather_priority {
                Some(weather) => {
                    UserPreference::from_weather_priority(UserId::from_session(cli_user)?, weather)?
                }
                None => orchestrator.load_preference(cli_user).await?,
            };
            let city = city.unwrap_or_else(|| config.location.city.clone());
            let request = RecommendationRequest::Chores(ChoreRequest::new(preference, city));

            match recommend(orchestrator, request, quiet).await? {
                RecommendationOutput::Chores(result) => Ok(formatter.chores(&result)),
                other => bail!("unexpected {} output", other.mode()),
            }
        }

        Command::Suggest {
            profile,
            date,
            save,
            show_prompt,
        } => {
            // Validate before spending a model call on a result that cannot be saved
            if save {
                UserId::from_session(cli_user)?;
            }
            let user_info = load_profile(&profile)?;
            // Without --date the plan covers the forecast location's today
            let mut request = SuggestionRequest::new(
                user_info,
                config.location.latitude,
                config.location.longitude,
            );
            if let Some(date) = date {
                request = request.on(date);
            }
            let request = RecommendationRequest::Suggestions(request);

            let suggestion = match recommend(orchestrator, request, quiet).await? {
                RecommendationOutput::Suggestions(result) => result,
                other => bail!("unexpected {} output", other.mode()),
            };
            if save {
                orchestrator.save_suggestion(cli_user, &suggestion.text).await?;
            }
            Ok(formatter.suggestion(&suggestion, show_prompt))
        }

        Command::Prefs { weather } => match weather {
            Some(weather) => {
                let saved = orchestrator.save_preference(cli_user, weather).await?;
                Ok(formatter.preference(&saved, true))
            }
            None => {
                let current = orchestrator.load_preference(cli_user).await?;
                Ok(formatter.preference(&current, false))
            }
        },

        Command::Select { chores } => {
            let ids: Vec<ChoreId> = chores.into_iter().map(ChoreId::from).collect();
            let saved = orchestrator.save_chore_selection(cli_user, &ids).await?;
            Ok(formatter.selection(&saved))
        }

        Command::Done { chore, at } => {
            let record = orchestrator
                .record_completion(cli_user, ChoreId::from(chore), at.unwrap_or_else(Utc::now))
                .await?;
            Ok(formatter.completion(&record))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("loading configuration")?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("{}", issue);
        }
        bail!("Invalid configuration ({} problem(s))", issues.len());
    }

    if !config.output.color {
        set_color_enabled(false);
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `chore-advisor --help` for usage.");
    };

    info!("Starting Chore Advisor");

    let format = cli.output.unwrap_or(match config.output.format {
        Some(FileOutputFormat::Json) => OutputFormat::Json,
        Some(FileOutputFormat::Text) | None => OutputFormat::Text,
    });
    let formatter = formatter_for(format);
    // Spinners would interleave with machine-readable output
    let quiet = cli.quiet || format == OutputFormat::Json;

    let orchestrator = build_orchestrator(&config, Needs::of(&command))?;
    let notice = memory_store_notice(&config, &command);

    let output = run(
        command,
        cli.user.as_deref(),
        quiet,
        &config,
        &orchestrator,
        formatter.as_ref(),
    )
    .await?;

    println!("{}", output);
    if let Some(notice) = notice {
        eprintln!("{}", notice);
    }

    Ok(())
}
