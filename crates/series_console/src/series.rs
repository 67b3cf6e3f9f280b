//! Series orchestration: rounds, turns, scoring and the replay prompt.

use crate::config::SeriesConfig;
use crate::console::{Console, RULE};
use crate::error::ConsoleError;
use crate::score::{RoundOutcome, Score};
use series_tictactoe::{
    Board, FallbackPicker, Marker, MoveSelection, check_winner, classify_computer_move, is_draw,
};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// How a series finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    /// A side reached the winning score.
    Won(Marker),
    /// The player declined another round before anyone reached it.
    Declined,
}

/// Summary of a finished series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesReport {
    /// How the series ended.
    pub outcome: SeriesOutcome,
    /// Final score.
    pub score: Score,
    /// Number of rounds played, draws included.
    pub rounds_played: u32,
}

/// Side that opens the given round (rounds are numbered from 1).
///
/// The computer opens odd rounds, the player even ones.
pub fn first_mover(round_number: u32) -> Marker {
    if round_number % 2 == 0 {
        Marker::Player
    } else {
        Marker::Computer
    }
}

/// Plays a best-of-N series between the console player and the computer.
pub struct Series<R, W, P> {
    config: SeriesConfig,
    console: Console<R, W>,
    picker: P,
    score: Score,
}

impl<R, W, P> Series<R, W, P>
where
    R: BufRead,
    W: Write,
    P: FallbackPicker,
{
    /// Creates a series with a zero score.
    pub fn new(config: SeriesConfig, console: Console<R, W>, picker: P) -> Self {
        Self {
            config,
            console,
            picker,
            score: Score::new(),
        }
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Consumes the series, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Plays rounds until a side reaches the winning score or the player
    /// declines another round.
    #[instrument(skip(self), fields(board_size = *self.config.board_size(), winning_score = *self.config.winning_score()))]
    pub fn play(&mut self) -> Result<SeriesReport, ConsoleError> {
        info!("Starting series");
        let winning_score = *self.config.winning_score();
        let mut round_number = 1;

        loop {
            let outcome = self.play_round(round_number)?;
            self.score.record(outcome);
            info!(round_number, ?outcome, score = %self.score, "Round finished");

            if let Some(champion) = self.score.champion(winning_score) {
                self.console.say(RULE)?;
                self.console.say(match champion {
                    Marker::Player => "Player WINS the series! Congratulations!",
                    Marker::Computer => "Computer WINS the series! Better luck next time!",
                })?;
                self.say_goodbye()?;
                return Ok(self.report(SeriesOutcome::Won(champion), round_number));
            }

            if !self.console.prompt_replay()? {
                info!("Player declined another round");
                self.say_goodbye()?;
                return Ok(self.report(SeriesOutcome::Declined, round_number));
            }

            round_number += 1;
        }
    }

    /// Plays a single round on a fresh board.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, round_number: u32) -> Result<RoundOutcome, ConsoleError> {
        let mut board = Board::new(*self.config.board_size())?;
        self.console.show_rules(&self.score, &self.config)?;
        self.console.show_board(&board)?;

        let mut to_move = first_mover(round_number);
        debug!(%to_move, "Round opened");

        loop {
            let index = match to_move {
                Marker::Player => self.console.prompt_move(&board)?,
                Marker::Computer => self.computer_move(&board)?,
            };
            board.place(index, to_move)?;
            self.console.show_board(&board)?;

            // A full board that completes a line is a win, not a draw.
            if check_winner(&board, to_move) {
                self.console.announce(match to_move {
                    Marker::Player => "Congratulations, the player WON this round!",
                    Marker::Computer => "The computer WON this round!",
                })?;
                return Ok(RoundOutcome::Won(to_move));
            }

            if is_draw(&board) {
                self.console.announce("It's a draw!")?;
                return Ok(RoundOutcome::Draw);
            }

            to_move = to_move.opponent();
        }
    }

    fn computer_move(&mut self, board: &Board) -> Result<usize, ConsoleError> {
        self.console.say(RULE)?;
        self.console.say("Computer's turn...")?;

        let delay = *self.config.think_delay_ms();
        if delay > 0 {
            std::thread::sleep(Duration::from_millis(delay));
        }

        let selection =
            classify_computer_move(board, &mut self.picker).ok_or(ConsoleError::NoMovesLeft)?;
        match selection {
            MoveSelection::Win(index) => info!(index, "Computer completes a line"),
            MoveSelection::Block(index) => info!(index, "Computer blocks the player"),
            MoveSelection::Fallback(index) => debug!(index, "Computer plays a fallback move"),
        }
        Ok(selection.index())
    }

    fn say_goodbye(&mut self) -> Result<(), ConsoleError> {
        self.console.say(format!("Final Score: {}", self.score))?;
        self.console.say("Thanks for playing! Goodbye!")
    }

    fn report(&self, outcome: SeriesOutcome, rounds_played: u32) -> SeriesReport {
        SeriesReport {
            outcome,
            score: self.score,
            rounds_played,
        }
    }
}
