//! CLI entrypoint for number-facts
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use facts_application::{
    FactOrchestrator, FactQueryClient, FactService, FetchLogger, FetchProgressNotifier,
    ManageCollectionsUseCase, NoFetchLogger, NoFetchProgress,
};
use facts_domain::{
    ConfigIssue, FactCategory, FactRequest, NumberFact, QueryMode, Severity, ValidationError,
};
use facts_infrastructure::{
    ConfigLoader, FileConfig, JsonFileCollectionStore, JsonlFetchLogger, build_http_client,
    build_provider_chain,
};
use facts_presentation::{
    Cli, Command, FavoritesCommand, HistoryCommand, OutputFormatter, ProgressReporter,
    SimpleProgress, formatter_for,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Everything a command needs, built once from the configuration
struct App {
    query: FactQueryClient,
    service: Arc<FactService>,
    provider_names: Vec<String>,
    collections: ManageCollectionsUseCase,
    spinner: Option<Arc<ProgressReporter>>,
    formatter: Box<dyn OutputFormatter>,
}

enum Lookup {
    Found(NumberFact),
    Failed,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    info!("Starting number-facts");

    let app = build_app(&cli, &config)?;
    app.run(command).await
}

/// Initialize logging based on verbosity level.
///
/// With `--log-file` the subscriber writes through a non-blocking file
/// appender; the returned guard flushes it on exit.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .context("--log-file must name a file")?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => {
                warn!("{}", issue.message);
                eprintln!("Warning: {}", issue.message);
            }
            Severity::Error => eprintln!("Error: {}", issue.message),
        }
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn build_app(cli: &Cli, config: &FileConfig) -> Result<App> {
    // === Dependency Injection ===
    let provider_config = config.provider_config();
    let client = build_http_client(&provider_config)?;
    let chain = build_provider_chain(&provider_config, client);

    let fetch_logger: Arc<dyn FetchLogger> = match config.logging.fetch_log_path() {
        Some(path) => match JsonlFetchLogger::open(&path) {
            Some(logger) => {
                info!("Fetch journal: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoFetchLogger),
        },
        None => Arc::new(NoFetchLogger),
    };

    let orchestrator = FactOrchestrator::new(chain).with_fetch_logger(fetch_logger.clone());
    let provider_names = orchestrator.provider_names();
    let service = Arc::new(FactService::new(Arc::new(orchestrator)));

    // Progress goes to stderr; JSON output stays machine-readable
    let json = matches!(cli.output, facts_presentation::OutputFormat::Json);
    let mut spinner = None;
    let progress: Arc<dyn FetchProgressNotifier> = if cli.quiet || json {
        Arc::new(NoFetchProgress)
    } else if std::io::stderr().is_terminal() {
        let reporter = Arc::new(ProgressReporter::new());
        spinner = Some(reporter.clone());
        reporter
    } else {
        Arc::new(SimpleProgress)
    };

    let query = FactQueryClient::new(service.clone(), config.query_config())
        .with_progress(progress)
        .with_fetch_logger(fetch_logger);

    let store_dir = config.storage.resolve_dir();
    info!("Storage directory: {}", store_dir.display());
    let collections = ManageCollectionsUseCase::new(
        Arc::new(JsonFileCollectionStore::new(store_dir)),
        config.collection_limits(),
    );

    Ok(App {
        query,
        service,
        provider_names,
        collections,
        spinner,
        formatter: formatter_for(cli.output.into()),
    })
}

impl App {
    async fn run(&self, command: &Command) -> Result<ExitCode> {
        match command {
            Command::Fact {
                number,
                lookup,
                save,
            } => {
                let request = FactRequest::from_input(number.as_deref(), &lookup.category, false);
                let Some(request) = self.validated(request) else {
                    return Ok(ExitCode::from(2));
                };
                let Lookup::Found(fact) = self.lookup(request, self.mode(lookup.strict)).await
                else {
                    return Ok(ExitCode::FAILURE);
                };
                self.remember(&fact);
                if *save {
                    self.save_favorite(&fact)?;
                }
                Ok(ExitCode::SUCCESS)
            }

            Command::Random { lookup } => {
                let request = FactRequest::from_input(None, &lookup.category, true);
                let Some(request) = self.validated(request) else {
                    return Ok(ExitCode::from(2));
                };
                match self.lookup(request, self.mode(lookup.strict)).await {
                    Lookup::Found(fact) => {
                        self.remember(&fact);
                        Ok(ExitCode::SUCCESS)
                    }
                    Lookup::Failed => Ok(ExitCode::FAILURE),
                }
            }

            Command::Category { category } => {
                let category = category
                    .parse::<FactCategory>()
                    .map_err(|_| ValidationError::InvalidCategory(category.clone()));
                let Some(category) = self.validated(category) else {
                    return Ok(ExitCode::from(2));
                };
                let facts = self.query.facts_by_category(category);
                print!("{}", self.formatter.format_fact_list(category, &facts));
                Ok(ExitCode::SUCCESS)
            }

            Command::Providers => {
                let available = self
                    .service
                    .available_providers(&Default::default())
                    .await;
                print!(
                    "{}",
                    self.formatter
                        .format_providers(&self.provider_names, &available)
                );
                Ok(ExitCode::SUCCESS)
            }

            Command::Favorites(cmd) => self.favorites(cmd).await,
            Command::History(cmd) => self.history(cmd),
        }
    }

    async fn favorites(&self, cmd: &FavoritesCommand) -> Result<ExitCode> {
        match cmd {
            FavoritesCommand::List => {
                print!(
                    "{}",
                    self.formatter.format_favorites(&self.collections.favorites())
                );
            }
            FavoritesCommand::Add { number, category } => {
                let request = FactRequest::from_input(number.as_deref(), category, false);
                let Some(request) = self.validated(request) else {
                    return Ok(ExitCode::from(2));
                };
                let Lookup::Found(fact) = self.lookup(request, self.query.default_mode()).await
                else {
                    return Ok(ExitCode::FAILURE);
                };
                self.save_favorite(&fact)?;
            }
            FavoritesCommand::Remove { id } => {
                let removed = self
                    .collections
                    .remove_favorite(id)
                    .context("Failed to update favorites")?;
                return Ok(self.notice(removed, "Removed favorite", id));
            }
        }
        Ok(ExitCode::SUCCESS)
    }

    fn history(&self, cmd: &HistoryCommand) -> Result<ExitCode> {
        match cmd {
            HistoryCommand::List => {
                print!(
                    "{}",
                    self.formatter.format_history(&self.collections.history())
                );
            }
            HistoryCommand::Remove { id } => {
                let removed = self
                    .collections
                    .remove_history_item(id)
                    .context("Failed to update history")?;
                return Ok(self.notice(removed, "Removed history entry", id));
            }
            HistoryCommand::Clear => {
                self.collections
                    .clear_history()
                    .context("Failed to clear history")?;
                print!("{}", self.formatter.format_notice("History cleared", None));
            }
        }
        Ok(ExitCode::SUCCESS)
    }

    fn mode(&self, strict: bool) -> QueryMode {
        if strict {
            QueryMode::Strict
        } else {
            self.query.default_mode()
        }
    }

    /// Print a validation failure and yield nothing.
    fn validated<T>(&self, input: Result<T, ValidationError>) -> Option<T> {
        match input {
            Ok(value) => Some(value),
            Err(e) => {
                eprint!("{}", self.formatter.format_validation_error(&e));
                None
            }
        }
    }

    /// Run one query to completion and print the outcome.
    async fn lookup(&self, request: FactRequest, mode: QueryMode) -> Lookup {
        let result = self.query.query_with_mode(request, mode).settled().await;
        if let Some(spinner) = &self.spinner {
            spinner.finish();
        }

        match result {
            Ok(fact) => {
                print!("{}", self.formatter.format_fact(&fact));
                Lookup::Found(fact)
            }
            Err(e) => {
                print!("{}", self.formatter.format_error(&e));
                Lookup::Failed
            }
        }
    }

    /// Record a lookup in history. Failing to persist is not fatal.
    fn remember(&self, fact: &NumberFact) {
        if let Err(e) = self.collections.record_search(fact) {
            warn!("Could not record history: {}", e);
        }
    }

    fn save_favorite(&self, fact: &NumberFact) -> Result<()> {
        let added = self
            .collections
            .add_favorite(fact)
            .context("Failed to save favorite")?;
        let message = if added {
            "Added to favorites"
        } else {
            "Already a favorite"
        };
        eprint!("{}", self.formatter.format_notice(message, None));
        Ok(())
    }

    fn notice(&self, changed: bool, action: &str, id: &str) -> ExitCode {
        if changed {
            print!("{}", self.formatter.format_notice(action, Some(id)));
            ExitCode::SUCCESS
        } else {
            eprintln!("No entry with id {}", id);
            ExitCode::FAILURE
        }
    }
}
