//! Console front end for best-of-N tic-tac-toe against the computer.
//!
//! The game logic lives in [`series_tictactoe`]; this crate owns the
//! terminal: configuration, prompts, rendering, rounds and scoring.
//!
//! # Example
//!
//! ```
//! use series_console::{Console, Series, SeriesConfig, SeriesOutcome};
//! use std::io::Cursor;
//!
//! # fn example() -> Result<(), series_console::ConsoleError> {
//! let config = SeriesConfig::default()
//!     .with_winning_score(1)
//!     .with_think_delay_ms(0);
//! let console = Console::new(Cursor::new("9\n7\n"), Vec::new());
//! let mut series = Series::new(config, console, |cells: &[usize]| cells[0]);
//!
//! let report = series.play()?;
//! assert!(matches!(report.outcome, SeriesOutcome::Won(_)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;
mod score;
mod series;

// Crate-level exports - Command line and configuration
pub use cli::Cli;
pub use config::SeriesConfig;

// Crate-level exports - Errors
pub use error::{ConfigError, ConsoleError};

// Crate-level exports - Console boundary
pub use console::{Console, RULE, render_board, render_rules};

// Crate-level exports - Series orchestration
pub use score::{RoundOutcome, Score};
pub use series::{Series, SeriesOutcome, SeriesReport, first_mover};
