//! Prefix Autocomplete - Main entrypoint.
//!
//! Loads configuration and the word list, then answers prefix queries either
//! once from the command line or interactively, one prefix per input line.

use clap::{Parser, Subcommand};
use prefix_autocomplete_lib::autocomplete::{run_session, write_answer, Autocompleter};
use prefix_autocomplete_lib::config::{self, AppConfig, LogConfig, Validate};
use prefix_autocomplete_lib::error::{report_error, AppError, AppResult, ErrorContext};
use std::path::PathBuf;
use std::process;
use tracing::info;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "prefix-autocomplete", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list file, one word per line (overrides the configuration)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the completions for a single prefix
    Query {
        /// Prefix to complete
        prefix: String,

        /// Print a JSON object instead of plain lines
        #[clap(long)]
        json: bool,

        /// Print full words instead of suffixes
        #[clap(long)]
        full: bool,
    },

    /// Read prefixes from standard input and print completions for each
    Interactive {
        /// Print full words instead of suffixes
        #[clap(long)]
        full: bool,
    },

    /// Validate the configuration and word list
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// completions on stdout stay machine readable.
fn init_logging(log: &LogConfig) -> AppResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Load configuration, applying the `--words` override.
fn load_config(args: &Args) -> AppResult<AppConfig> {
    let loader = config::ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let mut config = loader.load()?;

    if let Some(words) = &args.words {
        config.words.path = Some(words.clone());
        config.words.validate()?;
    }

    Ok(config)
}

/// Build the autocompleter, reporting and exiting on failure.
fn build_autocompleter(config: &AppConfig) -> Autocompleter {
    match Autocompleter::from_config(config) {
        Ok((autocompleter, report)) => {
            info!(
                inserted = report.inserted,
                duplicates = report.duplicates,
                skipped = report.skipped,
                "word list loaded"
            );
            autocompleter
        }
        Err(e) => {
            let source = config
                .words
                .path
                .as_ref()
                .map_or_else(|| "builtin".to_string(), |p| p.display().to_string());
            report_error(ErrorContext::new(e, "word_list").with_details(source));
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> AppResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    prefix_autocomplete_lib::init();

    match args.command.unwrap_or(Command::Interactive { full: false }) {
        Command::Query { prefix, json, full } => {
            let autocompleter = build_autocompleter(&config);
            let answer = autocompleter.query(&prefix, full);
            write_answer(&mut std::io::stdout().lock(), &answer, json)
        }
        Command::Interactive { full } => {
            let autocompleter = build_autocompleter(&config);
            run_session(&autocompleter, std::io::stdin().lock(), std::io::stdout().lock(), full)
        }
        Command::Validate => {
            info!("Validating configuration and word list");
            let autocompleter = build_autocompleter(&config);
            info!(words = autocompleter.trie().len(), "Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = AppConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
