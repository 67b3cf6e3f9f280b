//! Pure tic-tac-toe rules for best-of-N play against the computer.
//!
//! This crate holds the decision logic only. It never prints, reads input
//! or sleeps; the console front end owns all of that and calls in here.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`] and [`Marker`] for an N×N board
//! - **Rules**: win-line generation plus win and draw detection
//! - **Strategy**: the computer's two-ply heuristic (win, block, fallback)
//!
//! # Example
//!
//! ```
//! use series_tictactoe::{Board, Marker, check_winner, select_computer_move};
//!
//! # fn example() -> Result<(), series_tictactoe::BoardError> {
//! let mut board = Board::from_symbols(3, "OO X     ")?;
//! let mut first = |cells: &[usize]| cells[0];
//!
//! let index = select_computer_move(&board, &mut first).unwrap_or_default();
//! board.place(index, Marker::Computer)?;
//! assert!(check_winner(&board, Marker::Computer));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod rules;
mod strategy;
mod types;

// Crate-level exports - Board model
pub use error::BoardError;
pub use types::{Board, Marker, Square};

// Crate-level exports - Rules
pub use rules::{WinCombination, check_winner, is_draw, winning_combinations, would_win};

// Crate-level exports - Computer strategy
pub use strategy::{
    FallbackPicker, MoveSelection, RandomPicker, classify_computer_move, select_computer_move,
};
