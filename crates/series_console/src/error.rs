//! Error types for the console front end.

use derive_more::{Display, Error, From};
use series_tictactoe::BoardError;
use tracing::instrument;

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error raised while playing a series at the console.
#[derive(Debug, Display, Error, From)]
pub enum ConsoleError {
    /// Input ended while a prompt was waiting for an answer.
    #[display("Input closed while waiting for an answer")]
    #[from(skip)]
    InputClosed,

    /// The computer was asked to move on a full board.
    #[display("No empty cell left for the computer")]
    #[from(skip)]
    NoMovesLeft,

    /// Reading from or writing to the console failed.
    #[display("Console I/O error: {}", _0)]
    Io(std::io::Error),

    /// A move could not be applied to the board.
    #[display("Board error: {}", _0)]
    Board(BoardError),
}
