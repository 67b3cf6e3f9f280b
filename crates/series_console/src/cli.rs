//! Command-line interface for the series binary.

use crate::config::SeriesConfig;
use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Best-of-N tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "series")]
#[command(about = "Play a best-of-N tic-tac-toe series against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the series config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "series.toml")]
    pub config: PathBuf,

    /// Board dimension
    #[arg(long)]
    pub size: Option<usize>,

    /// Round wins needed to take the series
    #[arg(long)]
    pub wins: Option<u32>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random fallback moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "series_tictactoe=trace"
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    #[instrument(skip(self), fields(config = %self.config.display()))]
    pub fn resolve_config(&self) -> Result<SeriesConfig, ConfigError> {
        let mut config = SeriesConfig::load_or_default(&self.config)?;

        if let Some(size) = self.size {
            debug!(size, "Overriding board size");
            config = config.with_board_size(size);
        }
        if let Some(wins) = self.wins {
            debug!(wins, "Overriding winning score");
            config = config.with_winning_score(wins);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_think_delay_ms(delay_ms);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(Some(seed));
        }

        config.validate()?;
        Ok(config)
    }
}
