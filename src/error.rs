//! Errors raised by the session and host-facing layers.
//!
//! The rules core itself never fails: bad coordinates there are caller bugs
//! and panic.

use thiserror::Error;

use crate::types::Side;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("it is not this side's turn")]
    NotYourTurn,

    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    #[error("cannot pass while a legal move exists")]
    MustPlay,

    #[error("side to move has no legal moves")]
    NoLegalMoves,

    #[error("move selector returned no move")]
    SelectorFailed,

    #[error("board must have 64 cells, got {len}")]
    InvalidCellCount { len: usize },

    #[error("invalid cell value {value} at index {index} (expected -1, 0 or 1)")]
    InvalidCellValue { index: usize, value: i8 },

    #[error("invalid side {value} (expected 1 or -1)")]
    InvalidSide { value: i8 },

    #[error("{side:?} placed count {count} exceeds {max}")]
    InvalidPlacedCount { side: Side, count: u8, max: u8 },

    #[error("search depth must be between 1 and {max}, got {depth}")]
    InvalidDepth { depth: u8, max: u8 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
