use crate::board::Board;
use crate::legal::placeable_cells;
use crate::types::{PlacedCounts, Side};

/// Returns `(black_count, white_count)`.
pub fn scores(board: &Board) -> (u8, u8) {
    board.count()
}

/// Material balance from black's point of view. No positional weighting.
pub fn evaluate(board: &Board) -> i32 {
    let (black, white) = scores(board);
    black as i32 - white as i32
}

/// Neither side can place a tile, counting exhausted tile supplies.
pub fn is_terminal(board: &Board, counts: &PlacedCounts) -> bool {
    placeable_cells(board, Side::Black, counts).is_empty()
        && placeable_cells(board, Side::White, counts).is_empty()
}

/// Side with more tiles, `None` on a tie.
pub fn winner(board: &Board) -> Option<Side> {
    match evaluate(board) {
        v if v > 0 => Some(Side::Black),
        v if v < 0 => Some(Side::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, bit};
    use crate::types::MAX_PLACEMENTS;

    const FULL_BOARD: u64 = u64::MAX;

    fn idx(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    #[test]
    fn starting_board_scores_two_each_and_is_live() {
        let board = Board::new();

        assert_eq!(scores(&board), (2, 2));
        assert_eq!(evaluate(&board), 0);
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board, &PlacedCounts::new()));
    }

    #[test]
    fn evaluate_is_black_minus_white() {
        let black = bit(0) | bit(1) | bit(2);
        let board = Board::from_bitboards(black, bit(63));

        assert_eq!(evaluate(&board), 2);
        assert_eq!(winner(&board), Some(Side::Black));
    }

    #[test]
    fn full_board_is_terminal() {
        let board = Board::from_bitboards(FULL_BOARD ^ bit(0), bit(0));

        assert!(is_terminal(&board, &PlacedCounts::new()));
        assert_eq!(winner(&board), Some(Side::Black));
    }

    #[test]
    fn one_side_blocked_is_not_terminal() {
        let black = bit(idx(0, 1));
        let white = FULL_BOARD ^ bit(idx(0, 0)) ^ black;
        let board = Board::from_bitboards(black, white);

        assert!(!is_terminal(&board, &PlacedCounts::new()));
    }

    #[test]
    fn both_supplies_exhausted_is_terminal() {
        let counts = PlacedCounts {
            black: MAX_PLACEMENTS,
            white: MAX_PLACEMENTS,
        };

        assert!(is_terminal(&Board::new(), &counts));
    }
}
