//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Win lines are generated
//! from the board dimension on every call, so any N×N board works.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_draw;
pub use lines::{WinCombination, winning_combinations};
pub use win::{check_winner, would_win};
