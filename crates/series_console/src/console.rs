//! Console input/output for a series.
//!
//! All reads and writes go through [`Console`], which is generic over its
//! reader and writer so tests can script input and capture output.

use crate::config::SeriesConfig;
use crate::error::ConsoleError;
use crate::score::Score;
use series_tictactoe::{Board, Marker};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, instrument, warn};

/// Separator printed around announcements.
pub const RULE: &str = "============================================";

/// Renders the board with `+---+` borders, one row per line.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let border = format!("{}+", "+---".repeat(size));

    let mut out = border.clone();
    for row in board.squares().chunks(size) {
        let cells: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
        out.push_str(&format!("\n| {} |\n", cells.join(" | ")));
        out.push_str(&border);
    }
    out
}

/// Renders the banner shown at the start of every round.
pub fn render_rules(score: &Score, config: &SeriesConfig) -> String {
    let size = config.board_size();
    let wins = config.winning_score();
    format!(
        "Welcome to Tic Tac Toe - Best of {length}\n\
         {RULE}\n\
         Board Size: {size}x{size}\n\
         Current Score:\n\
         {score}\n\
         {RULE}\n\
         GAME RULES:\n\
         Each player places one mark per turn on the grid.\n\
         The WINNER is the first to place {size} marks in:\n\
         * a horizontal,\n\
         * vertical, or\n\
         * diagonal row.\n\
         \n\
         First to {wins} wins takes the series!\n\
         {RULE}\n\
         Let's start the game!\n\
         {RULE}",
        length = config.series_length(),
    )
}

/// Line-oriented console backed by any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes the round banner.
    pub fn show_rules(&mut self, score: &Score, config: &SeriesConfig) -> Result<(), ConsoleError> {
        self.say("")?;
        self.say(render_rules(score, config))
    }

    /// Writes the board.
    pub fn show_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        self.say(render_board(board))
    }

    /// Writes a message framed by separator lines.
    pub fn announce(&mut self, message: impl Display) -> Result<(), ConsoleError> {
        self.say(RULE)?;
        self.say(message)?;
        self.say(RULE)
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Input closed at prompt");
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks the player for a move until a valid empty cell is given.
    ///
    /// Input is 1-based; the returned index is 0-based.
    #[instrument(skip(self, board))]
    pub fn prompt_move(&mut self, board: &Board) -> Result<usize, ConsoleError> {
        let cells = board.cell_count();
        let prompt = format!(
            "Player {} | Enter your move (1-{}): ",
            Marker::Player,
            cells
        );

        loop {
            let answer = self.ask(&prompt)?;
            // Integers too large for i64 are still numbers, just off the board.
            let number = match answer.parse::<i64>() {
                Ok(number) => Some(number),
                Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                    None
                }
                Err(_) => {
                    debug!(answer = %answer, "Rejected non-numeric move");
                    self.say(format!("Please enter a valid number between 1 and {cells}."))?;
                    continue;
                }
            };

            let index = number
                .and_then(|n| n.checked_sub(1))
                .and_then(|n| usize::try_from(n).ok());
            match index {
                Some(index) if board.is_empty(index) => {
                    debug!(index, "Player move accepted");
                    return Ok(index);
                }
                _ => {
                    debug!(answer = %answer, "Rejected move outside the board or on an occupied cell");
                    self.say("Invalid move. Try again.")?;
                }
            }
        }
    }

    /// Asks whether to play another round until `Y` or `N` is given.
    #[instrument(skip(self))]
    pub fn prompt_replay(&mut self) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.ask("Do you want to play another round? (Y/N): ")?;
            match answer.to_uppercase().as_str() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => self.say("Invalid input. Please enter Y or N.")?,
            }
        }
    }
}
