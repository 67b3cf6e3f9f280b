//! Round outcomes and series scoring.

use series_tictactoe::Marker;
use serde::{Deserialize, Serialize};

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Round ended in a win.
    Won(Marker),
    /// Board filled with no winner.
    Draw,
}

/// Round wins per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    player: u32,
    computer: u32,
}

impl Score {
    /// Creates an empty score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Round wins for the human player.
    pub fn player(&self) -> u32 {
        self.player
    }

    /// Round wins for the computer.
    pub fn computer(&self) -> u32 {
        self.computer
    }

    /// Records a finished round. Draws leave the score unchanged.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won(Marker::Player) => self.player += 1,
            RoundOutcome::Won(Marker::Computer) => self.computer += 1,
            RoundOutcome::Draw => {}
        }
    }

    /// Side that has reached `winning_score`, if any.
    pub fn champion(&self, winning_score: u32) -> Option<Marker> {
        if self.player >= winning_score {
            Some(Marker::Player)
        } else if self.computer >= winning_score {
            Some(Marker::Computer)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player: {} | Computer: {}", self.player, self.computer)
    }
}
