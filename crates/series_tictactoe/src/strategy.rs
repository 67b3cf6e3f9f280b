//! Computer move selection.
//!
//! Two-ply greedy heuristic: take an immediate win, otherwise block the
//! player's immediate win, otherwise let a [`FallbackPicker`] choose among
//! the empty cells. Both scans walk cells in increasing index order, so the
//! lowest qualifying index always wins a tie.

use crate::rules::would_win;
use crate::{Board, Marker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, warn};

/// Chooses a cell when neither side has an immediate win.
///
/// `candidates` is never empty and lists empty cells in increasing order.
/// Implementations must return one of them.
pub trait FallbackPicker {
    /// Picks one index out of `candidates`.
    fn pick(&mut self, candidates: &[usize]) -> usize;
}

impl<F> FallbackPicker for F
where
    F: FnMut(&[usize]) -> usize,
{
    fn pick(&mut self, candidates: &[usize]) -> usize {
        self(candidates)
    }
}

/// Picks uniformly at random among the candidates.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Creates a picker seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible picker.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackPicker for RandomPicker {
    fn pick(&mut self, candidates: &[usize]) -> usize {
        candidates[self.rng.random_range(0..candidates.len())]
    }
}

/// A chosen computer move and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSelection {
    /// The computer completes a line.
    Win(usize),
    /// The computer takes the cell the player would win on.
    Block(usize),
    /// No immediate threat either way; picked by the fallback.
    Fallback(usize),
}

impl MoveSelection {
    /// Board index of the move.
    pub fn index(self) -> usize {
        match self {
            MoveSelection::Win(index) | MoveSelection::Block(index) | MoveSelection::Fallback(index) => {
                index
            }
        }
    }
}

/// Selects the computer's next move and reports why it was chosen.
///
/// Returns `None` on a full board. The board is never mutated; the caller
/// commits the mark at the returned index.
#[instrument(skip(board, picker), fields(size = board.size()))]
pub fn classify_computer_move<P>(board: &Board, picker: &mut P) -> Option<MoveSelection>
where
    P: FallbackPicker + ?Sized,
{
    let candidates = board.empty_cells();
    if candidates.is_empty() {
        warn!("Computer asked to move on a full board");
        return None;
    }

    if let Some(&index) = candidates
        .iter()
        .find(|&&i| would_win(board, i, Marker::Computer))
    {
        debug!(index, "Winning move available");
        return Some(MoveSelection::Win(index));
    }

    if let Some(&index) = candidates
        .iter()
        .find(|&&i| would_win(board, i, Marker::Player))
    {
        debug!(index, "Blocking player's winning move");
        return Some(MoveSelection::Block(index));
    }

    let choice = picker.pick(&candidates);
    let index = if candidates.contains(&choice) {
        choice
    } else {
        warn!(choice, "Fallback picked a cell that is not empty, using first candidate");
        candidates[0]
    };
    debug!(index, "No immediate threat, fallback move");
    Some(MoveSelection::Fallback(index))
}

/// Selects the computer's next move.
///
/// Same as [`classify_computer_move`] without the reason.
pub fn select_computer_move<P>(board: &Board, picker: &mut P) -> Option<usize>
where
    P: FallbackPicker + ?Sized,
{
    classify_computer_move(board, picker).map(MoveSelection::index)
}
