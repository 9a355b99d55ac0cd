//! Errors raised when a board or a move fails validation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("unsupported board size {size} (expected 1..={max})")]
    UnsupportedSize { size: usize, max: usize },

    #[error("invalid board size '{text}'")]
    InvalidSizeText { text: String },

    #[error("board has {count} cells, which is not a square grid")]
    NotSquare { count: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCell { character: char, position: usize },

    #[error("mark imbalance: {player} player marks vs {bot} bot marks")]
    MarkImbalance { player: usize, bot: usize },

    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("invalid move '{text}' (expected <row>,<col>)")]
    InvalidMoveText { text: String },
}
