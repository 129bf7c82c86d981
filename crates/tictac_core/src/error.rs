//! Error types for board, move and game operations.

use crate::types::Outcome;

/// Failure of a board, move or game operation.
///
/// Every failure is raised before any state is mutated, so the board or
/// game the operation was called on is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Board length below 1, or too large to allocate a grid for.
    #[display("Invalid board length {}", _0)]
    InvalidArgument(#[error(not(source))] usize),

    /// Coordinate outside the grid.
    #[display("Coordinates ({}, {}) are outside a {}x{} board", x, y, length, length)]
    OutOfBounds {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Board length.
        length: usize,
    },

    /// Target cell already played.
    #[display("Coordinates ({}, {}) are already occupied", x, y)]
    CellOccupied {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// Marker other than X or O.
    #[display("Invalid player value {:?}: expected X or O", _0)]
    InvalidValue(#[error(not(source))] String),

    /// Move attempted after a terminal outcome.
    #[display("Cannot make a new move on a finished game ({})", _0)]
    GameAlreadyFinished(#[error(not(source))] Outcome),

    /// Move index lookup out of bounds.
    #[display("Invalid move index {}: game has {} moves", index, len)]
    IndexOutOfRange {
        /// Requested index.
        index: i64,
        /// Number of recorded moves.
        len: usize,
    },

    /// Random move requested on a full board.
    #[display("No moves available on a full board")]
    NoMovesAvailable,
}

/// Failure to parse the textual board rendering.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Input had no rows.
    #[display("Board text is empty")]
    Empty,

    /// Row width differs from the number of rows.
    #[display("Row {} has {} cells, expected {}", row, found, expected)]
    NotSquare {
        /// Zero-based row.
        row: usize,
        /// Cells found in the row.
        found: usize,
        /// Expected cells (number of rows).
        expected: usize,
    },

    /// Unknown cell character.
    #[display("Invalid cell {:?} in row {}", cell, row)]
    InvalidCell {
        /// Zero-based row.
        row: usize,
        /// Offending cell text.
        cell: String,
    },
}
