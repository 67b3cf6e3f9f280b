//! Win detection logic for tic-tac-toe.

use super::lines::winning_combinations;
use crate::{Board, Marker, Square};
use tracing::instrument;

/// Checks if `marker` holds every cell of some winning line.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board, marker: Marker) -> bool {
    let target = Some(Square::Occupied(marker));
    winning_combinations(board.size())
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == target))
}

/// Checks if placing `marker` at `index` would leave `marker` with a
/// complete line.
///
/// The board is not touched: `index` is treated as holding `marker` while
/// every line is scanned. Returns `false` when `index` is not an empty cell.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn would_win(board: &Board, index: usize, marker: Marker) -> bool {
    if !board.is_empty(index) {
        return false;
    }

    let target = Some(Square::Occupied(marker));
    winning_combinations(board.size())
        .iter()
        .any(|line| line.iter().all(|&i| i == index || board.get(i) == target))
}
