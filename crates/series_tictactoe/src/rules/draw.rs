//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// Winners are not considered: a full board that also holds a complete
/// line still reports `true`, so callers check [`check_winner`] first on
/// every ply.
///
/// [`check_winner`]: super::check_winner
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::Marker;

    #[test]
    fn test_empty_board_not_draw() {
        let board = Board::new(3).unwrap();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_symbols(3, "XOXOXXOX ").unwrap();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_winner() {
        // X O X / O X X / O X O
        let board = Board::from_symbols(3, "XOXOXXOXO").unwrap();
        assert!(is_draw(&board));
        assert!(!check_winner(&board, Marker::Player));
        assert!(!check_winner(&board, Marker::Computer));
    }

    #[test]
    fn test_full_board_with_winner_is_still_full() {
        // X X X / O O X / X O O
        let board = Board::from_symbols(3, "XXXOOXXOO").unwrap();
        assert!(is_draw(&board));
        assert!(check_winner(&board, Marker::Player));
    }
}
