//! Series configuration loaded from TOML.

use crate::error::ConfigError;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one best-of-N series.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SeriesConfig {
    /// Board dimension (3 for classic tic-tac-toe).
    board_size: usize,

    /// Round wins needed to take the series.
    winning_score: u32,

    /// Pause before the computer moves, in milliseconds.
    think_delay_ms: u64,

    /// Seed for the computer's fallback picks. `None` seeds from the OS.
    seed: Option<u64>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            winning_score: 2,
            think_delay_ms: 1000,
            seed: None,
        }
    }
}

impl SeriesConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            board_size = config.board_size,
            winning_score = config.winning_score,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the settings describe a playable series.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1"));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::new("winning_score must be at least 1"));
        }
        Ok(())
    }

    /// Maximum number of decisive rounds (the "best of" number).
    pub fn series_length(&self) -> u32 {
        self.winning_score.saturating_mul(2).saturating_sub(1)
    }
}
