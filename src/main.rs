/*!
# Sixty - Sixty-Second Journaling

This file contains the main application flow, coordinating the various components
to serve one command against a freshly generated in-memory journal.

## Usage

```
sixty [OPTIONS] <COMMAND>

Commands:
  home      Greeting, today's prompt and current streak
  list      All entries, oldest first
  search    Search entries by text or date and filter by mood
  month     Entries of one month, most recent first
  calendar  Calendar grid for a month
  trend     Mood trend over a window
  stats     Entry counts, word totals, streaks and mood distribution
  show      Show one entry by id
  record    Journal for today (or a past date) and add the entry
  edit      Change the text or moods of an entry
  delete    Delete an entry
  profile   The user profile
  moods     The mood taxonomy
```

## Configuration

- `SIXTY_TODAY`: Mock current date (defaults to 2025-12-27)
- `SIXTY_SEED`: Generator seed (defaults to random)
- `SIXTY_SKIP_RATE`: Probability a day has no entry (defaults to 0.10)
- `RUST_LOG`: Log filter (defaults to info, or debug with --verbose)
*/

use clap::Parser;
use sixty::app::{self, OutputFormat};
use sixty::cli::CliArgs;
use sixty::config::{parse_date, Config};
use sixty::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use sixty::errors::{AppError, AppResult};
use sixty::store::EntryStore;
use std::io::{self, IsTerminal, Write};
use tracing::{debug, error, info, info_span};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber. Logs go to stderr so stdout carries only views.
fn init_tracing(log_format: &str, verbose: bool) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(io::stderr);

    if log_format == LOG_FORMAT_JSON {
        builder.json().with_current_span(true).init();
    } else {
        builder
            .with_target(false)
            .with_ansi(io::stderr().is_terminal())
            .init();
    }
}

/// Applies CLI overrides on top of environment configuration.
fn resolve_config(args: &CliArgs) -> AppResult<Config> {
    let mut config = Config::load()?;

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(raw) = args.today.as_deref() {
        config.today = parse_date(raw).map_err(|e| {
            AppError::Config(format!("--today must be YYYY-MM-DD or YYYYMMDD: {}", e))
        })?;
    }

    config.validate()?;
    Ok(config)
}

fn run_app(args: &CliArgs) -> AppResult<()> {
    info!("Loading configuration");
    let config = resolve_config(args)?;
    debug!(?config, "Configuration resolved");

    let (mut store, seed) = EntryStore::generate(&config)?;
    info!(seed, entries = store.len(), "Journal ready");

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let output = app::run(&args.command, &mut store, config.today, format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// The main entry point for the sixty application.
///
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Generates the in-memory journal
/// 5. Runs the requested command and prints its output
fn main() -> AppResult<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_format, args.verbose);

    let correlation_id = uuid::Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting sixty");
    debug!(command = ?args.command, "CLI arguments parsed");

    // Errors are logged once here at the application boundary
    run_app(&args).inspect_err(|e| error!(error = %e, "Command failed"))
}
