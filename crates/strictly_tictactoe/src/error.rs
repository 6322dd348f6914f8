//! Error types for move submission and board sizing.

use derive_more::{Display, Error};

/// Reasons a submitted move is rejected.
///
/// Every variant is a caller-side precondition violation. A rejected move
/// leaves the game exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("Cell ({row}, {column}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {column}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The game has been won or drawn; start a new one instead.
    #[display("Game is already over")]
    GameAlreadyOver,
}

/// Reasons a board size is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum BoardSizeError {
    /// A board needs at least one cell per side.
    #[display("Board size must be at least 1")]
    Zero,

    /// The cell count would not fit in memory addressing.
    #[display("Board size {size} is too large")]
    TooLarge {
        /// Requested side length.
        size: usize,
    },
}
