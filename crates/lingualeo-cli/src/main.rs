//! Lingualeo CLI - translate words and grow your Lingualeo vocabulary
//!
//! This is the main entry point: it resolves settings from config files and
//! the command line, logs in, looks up every word concurrently, prints the
//! ranked translations, and optionally plays pronunciations or adds the words
//! to the dictionary.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use config::Settings;
use error::{Error, Result};
use lingualeo_core::{FetchOutcome, WordResult};
use logging::{redaction, timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use std::sync::Arc;
use tracing::instrument;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli).await {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(words = cli.words.len()))]
async fn run(cli: Cli) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    if let Some(shell) = cli.completions {
        return handlers::handle_completions(shell);
    }

    let settings = {
        let _config_timer = Timer::new("config_loading");
        tracing::info!("Loading configuration");
        Settings::load(&cli)?
    };
    log_settings(&settings);

    let mut output = OutputWriter::new(cli.output, cli.use_color(), cli.quiet);

    let client = Arc::new(handlers::open_session(&settings, &mut output).await?);
    let outcomes =
        handlers::handle_translate(Arc::clone(&client), &settings.words, &mut output).await?;
    let found: Vec<&WordResult> = outcomes.iter().filter_map(FetchOutcome::as_success).collect();

    // A failed playback still lets the add step run.
    let playback = if settings.sound {
        handlers::handle_sound(&found, settings.player.as_deref(), &mut output)
            .await
            .err()
    } else {
        None
    };

    let (add_total, add_failed) = if settings.add {
        handlers::handle_add(
            &client,
            &found,
            &settings.translations,
            settings.force,
            &mut output,
        )
        .await?
    } else {
        (0, 0)
    };

    finish_run(
        handlers::failure_count(&outcomes),
        outcomes.len(),
        add_failed,
        add_total,
        playback,
    )
}

/// Decide how a run ends once every stage has had its turn
fn finish_run(
    failed: usize,
    total: usize,
    add_failed: usize,
    add_total: usize,
    playback: Option<Error>,
) -> Result<()> {
    if failed > 0 || add_failed > 0 {
        if let Some(e) = playback {
            tracing::error!(error = %e, "Pronunciation playback failed");
        }
        return Err(Error::PartialFailure {
            failed,
            total,
            add_failed,
            add_total,
        });
    }

    match playback {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn log_settings(settings: &Settings) {
    match serde_json::to_value(settings) {
        Ok(mut value) => {
            redaction::redact_json_value(&mut value);
            tracing::debug!(settings = %value, "Resolved settings");
        }
        Err(e) => tracing::debug!("Could not render settings: {}", e),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
