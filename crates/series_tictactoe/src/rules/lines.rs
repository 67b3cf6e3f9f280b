//! Winning line generation for N×N boards.

use tracing::instrument;

/// Board indices forming one row, column or diagonal.
pub type WinCombination = Vec<usize>;

/// Generates every winning line for a board of the given dimension.
///
/// Returns `2 * size + 2` lines of `size` indices each: all rows, then all
/// columns, then the main diagonal and the anti-diagonal. A 1×1 board yields
/// the same single cell four times.
#[instrument(level = "trace")]
pub fn winning_combinations(size: usize) -> Vec<WinCombination> {
    let rows = (0..size).map(|r| (0..size).map(|c| r * size + c).collect());
    let columns = (0..size).map(|c| (0..size).map(|r| r * size + c).collect());
    let main: WinCombination = (0..size).map(|i| i * size + i).collect();
    let anti: WinCombination = (0..size).map(|i| i * size + (size - 1 - i)).collect();

    rows.chain(columns).chain([main, anti]).collect()
}
