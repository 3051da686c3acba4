pub mod search;

use crate::board::Board;
use crate::game::MoveSelector;
use crate::types::{Move, PlacedCounts, Side};

use search::Searcher;

/// Plays the negamax choice at the requested depth.
#[derive(Debug, Default, Clone, Copy)]
pub struct NegamaxSelector;

impl MoveSelector for NegamaxSelector {
    fn select_move(
        &self,
        board: &Board,
        side: Side,
        counts: &PlacedCounts,
        depth: u8,
    ) -> Option<Move> {
        Searcher::new(depth).search(board, side, counts).best
    }
}
