//! Othello rules engine and fixed-depth negamax opponent.

pub mod ai;
pub mod board;
pub mod error;
pub mod eval;
pub mod flip;
pub mod game;
pub mod legal;
mod scan;
pub mod types;
pub mod wasm;

pub use ai::search::{SearchResult, Searcher, bot_move, negamax};
pub use board::Board;
pub use error::{GameError, Result};
pub use eval::{evaluate, is_terminal, scores, winner};
pub use flip::{apply_flips, play};
pub use legal::{is_placeable, placeable_cells};
pub use types::{Cell, Move, PlacedCounts, Side};
