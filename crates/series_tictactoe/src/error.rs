//! Board error types.

/// Error that can occur when building or mutating a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The board dimension cannot hold any cell.
    #[display("Board size {} is not supported", _0)]
    InvalidSize(usize),

    /// The index does not address a cell on this board.
    #[display("Cell {index} is out of bounds (board has {cells} cells)")]
    OutOfBounds {
        /// Requested cell index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The number of supplied squares does not match size².
    #[display("Expected {expected} squares, got {actual}")]
    LengthMismatch {
        /// size² for the requested dimension.
        expected: usize,
        /// Number of squares actually supplied.
        actual: usize,
    },

    /// A board symbol other than `X`, `O`, `.`, `_` or space.
    #[display("Unknown board symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for BoardError {}
