//! Best-of-N tic-tac-toe against the computer.

use anyhow::Result;
use clap::Parser;
use series_console::{Cli, Console, ConsoleError, Series};
use series_tictactoe::RandomPicker;
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_level.as_deref());

    let config = cli.resolve_config()?;
    let picker = match config.seed() {
        Some(seed) => RandomPicker::seeded(*seed),
        None => RandomPicker::new(),
    };

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    let mut series = Series::new(config, console, picker);

    match series.play() {
        Ok(report) => {
            info!(outcome = ?report.outcome, score = %report.score, rounds = report.rounds_played, "Series finished");
            Ok(())
        }
        Err(ConsoleError::InputClosed) => {
            warn!(score = %series.score(), "Input closed, leaving the series");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
#[instrument]
fn initialize_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
