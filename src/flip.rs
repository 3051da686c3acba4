use crate::board::Board;
use crate::scan;
use crate::types::Side;

/// Resolves the captures caused by `side`'s tile at `(row, col)`.
///
/// The tile must already be on `board`; only the flips are applied. Each
/// direction is judged on its own and the results are merged.
pub fn apply_flips(board: &Board, side: Side, row: usize, col: usize) -> Board {
    debug_assert_eq!(
        board.cell(row, col).side(),
        Some(side),
        "apply_flips expects the placed tile on the board"
    );
    let flips = scan::captures(board, side, row, col);
    board.with_owner(flips, side)
}

/// Places `side`'s tile at `(row, col)` and resolves its captures.
pub fn play(board: &Board, side: Side, row: usize, col: usize) -> Board {
    apply_flips(&board.with_tile(row, col, side), side, row, col)
}
