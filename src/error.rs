//! Error types for puzzle construction, input and solving.

use thiserror::Error;

/// Errors surfaced at the boundary of the solver.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// A row's length does not match the number of rows.
    #[error("board must be square: {rows} rows but row {row} has {len} tiles")]
    NotSquare { rows: usize, row: usize, len: usize },

    /// The tile count is not a perfect square, or the board is empty.
    #[error("{count} tiles cannot form a square board")]
    BadTileCount { count: usize },

    /// The tiles are not a permutation of `0..dim*dim`.
    #[error("a {dim}x{dim} board must contain each tile 0..={max} exactly once")]
    NotPermutation { dim: usize, max: usize },

    /// The requested side length is outside what a `u8` tile can number.
    #[error("board side must be between 1 and {max}, got {dim}")]
    UnsupportedSize { dim: usize, max: usize },

    /// A token in the input could not be read as a tile.
    #[error("invalid tile {token:?}")]
    InvalidTile {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Input ended before a full board was read.
    #[error("expected {expected} rows, found {found}")]
    MissingRows { expected: usize, found: usize },

    /// Start and goal have different sizes.
    #[error("start is {start}x{start} but goal is {goal}x{goal}")]
    DimensionMismatch { start: usize, goal: usize },

    /// The start state has the wrong parity to reach the goal.
    #[error("puzzle is not solvable")]
    Unsolvable,

    /// The frontier emptied before the goal was reached.
    #[error("no solution found after expanding {expanded} nodes")]
    NoSolution { expanded: usize },

    /// The expansion cap was hit before the goal was reached.
    #[error("gave up after expanding {expanded} nodes")]
    LimitReached { expanded: usize },

    /// More random instances were requested than distinct ones exist.
    #[error("requested {requested} instances but only {available} distinct solvable ones exist")]
    TooManyInstances { requested: usize, available: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for puzzle operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
