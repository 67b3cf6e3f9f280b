//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by one of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Marker {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl Marker {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Marker::Player => Marker::Computer,
            Marker::Computer => Marker::Player,
        }
    }

    /// Board symbol for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::Player => 'X',
            Marker::Computer => 'O',
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a side.
    Occupied(Marker),
}

impl Square {
    /// Board symbol for this square (a blank for empty cells).
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(marker) => marker.symbol(),
        }
    }
}

/// N×N tic-tac-toe board stored row-major (`index = row * size + col`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with the given dimension.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let cells = Self::cells_for(size)?;
        Ok(Self {
            size,
            squares: vec![Square::Empty; cells],
        })
    }

    /// Builds a board from existing squares.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(size: usize, squares: Vec<Square>) -> Result<Self, BoardError> {
        let expected = Self::cells_for(size)?;
        if squares.len() != expected {
            return Err(BoardError::LengthMismatch {
                expected,
                actual: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }

    /// Parses a board from one symbol per cell.
    ///
    /// `X` is the player, `O` the computer, and a space, `.` or `_`
    /// an empty cell.
    #[instrument]
    pub fn from_symbols(size: usize, symbols: &str) -> Result<Self, BoardError> {
        let squares = symbols
            .chars()
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Marker::Player)),
                'O' | 'o' => Ok(Square::Occupied(Marker::Computer)),
                ' ' | '.' | '_' => Ok(Square::Empty),
                other => Err(BoardError::UnknownSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_squares(size, squares)
    }

    fn cells_for(size: usize) -> Result<usize, BoardError> {
        match size.checked_mul(size) {
            Some(cells) if size > 0 => Ok(cells),
            _ => Err(BoardError::InvalidSize(size)),
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (size²).
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a cell exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Overwrites the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), BoardError> {
        let cells = self.squares.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds { index, cells })?;
        *slot = square;
        Ok(())
    }

    /// Commits a marker to an empty cell.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, marker: Marker) -> Result<(), BoardError> {
        match self.get(index) {
            None => Err(BoardError::OutOfBounds {
                index,
                cells: self.squares.len(),
            }),
            Some(Square::Occupied(_)) => Err(BoardError::Occupied(index)),
            Some(Square::Empty) => self.set(index, Square::Occupied(marker)),
        }
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Indices of empty cells in increasing order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }
}
