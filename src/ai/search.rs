use crate::board::Board;
use crate::eval::{evaluate, is_terminal};
use crate::flip::play;
use crate::legal::placeable_cells;
use crate::types::{Move, PlacedCounts, Side};

/// Bound used for the root window. `-INF` is representable, so negating a
/// bound never overflows.
pub const INF: i32 = i32::MAX;

/// Best move found and its value from the searching side's perspective.
/// `best == None` means the side passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub value: i32,
}

impl SearchResult {
    fn leaf(value: i32) -> Self {
        Self { best: None, value }
    }
}

/// Fixed-depth negamax with alpha-beta pruning.
///
/// Holds only the depth and a node counter that is reset on every
/// [`Searcher::search`], so consecutive searches are independent.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    nodes: u64,
}

impl Searcher {
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            nodes: 0,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `board` for `side` with the full window.
    ///
    /// Panics when the searcher was built with depth 0: a zero-ply search
    /// never picks a move, which would read as a pass.
    pub fn search(&mut self, board: &Board, side: Side, counts: &PlacedCounts) -> SearchResult {
        assert!(self.max_depth >= 1, "search depth must be at least 1");
        self.nodes = 0;
        let root = *board;
        let result = self.negamax(&root, side, *counts, self.max_depth, -INF, INF);
        log::debug!(
            "negamax depth={} side={side:?} nodes={} best={:?} value={}",
            self.max_depth,
            self.nodes,
            result.best,
            result.value
        );
        result
    }

    /// One negamax node. `counts` is owned so each branch advances its own
    /// copy of the tile supply.
    pub fn negamax(
        &mut self,
        board: &Board,
        side: Side,
        counts: PlacedCounts,
        depth: u8,
        alpha: i32,
        beta: i32,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || is_terminal(board, &counts) {
            return SearchResult::leaf(evaluate(board) * side.sign());
        }

        let moves = placeable_cells(board, side, &counts);
        if moves.is_empty() {
            let child = self.negamax(board, side.opponent(), counts, depth - 1, -beta, -alpha);
            return SearchResult::leaf(-child.value);
        }

        let mut best = SearchResult::leaf(-INF);
        let mut alpha = alpha;

        for mv in moves {
            let next = play(board, side, mv.row as usize, mv.col as usize);
            let child = self.negamax(
                &next,
                side.opponent(),
                counts.record(side),
                depth - 1,
                -beta,
                -alpha,
            );

            let score = -child.value;
            if score > best.value {
                best = SearchResult {
                    best: Some(mv),
                    value: score,
                };
            }
            if best.value > alpha {
                alpha = best.value;
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

/// Runs one negamax node with a throwaway [`Searcher`].
pub fn negamax(
    board: &Board,
    side: Side,
    counts: &PlacedCounts,
    depth: u8,
    alpha: i32,
    beta: i32,
) -> SearchResult {
    Searcher::new(depth).negamax(board, side, *counts, depth, alpha, beta)
}

/// Picks `side`'s move with a `depth`-ply search, `None` when it must pass.
pub fn bot_move(board: &Board, side: Side, counts: &PlacedCounts, depth: u8) -> Option<Move> {
    Searcher::new(depth).search(board, side, counts).best
}
