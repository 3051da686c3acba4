use crate::board::{BOARD_SIZE, Board, NUM_SQUARES, bit, square_index};
use crate::scan;
use crate::types::{Move, PlacedCounts, Side};

/// True when `(row, col)` is empty and at least one ray from it captures.
pub fn is_placeable(board: &Board, side: Side, row: usize, col: usize) -> bool {
    if (board.occupied() & bit(square_index(row, col))) != 0 {
        return false;
    }
    scan::rays(board, side, row, col).any(|ray| ray.captures())
}

/// Every placeable cell for `side` in row-major order.
///
/// The search iterates moves in exactly this order, so ties between equally
/// valued moves always resolve to the earliest cell. A side that has used
/// up its tiles gets an empty list without scanning the board.
pub fn placeable_cells(board: &Board, side: Side, counts: &PlacedCounts) -> Vec<Move> {
    if counts.is_exhausted(side) {
        return Vec::new();
    }

    let legal = legal_mask(board, side);
    (0..NUM_SQUARES)
        .filter(|&pos| (legal & bit(pos)) != 0)
        .map(Move::from_index)
        .collect()
}

/// Returns legal move mask for the given side, ignoring tile supply.
pub fn legal_mask(board: &Board, side: Side) -> u64 {
    let mut legal = 0u64;

    for pos in 0..NUM_SQUARES {
        let (row, col) = (pos / BOARD_SIZE, pos % BOARD_SIZE);
        if is_placeable(board, side, row, col) {
            legal |= bit(pos);
        }
    }

    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flip::play;
    use crate::types::MAX_PLACEMENTS;

    const FULL_BOARD: u64 = u64::MAX;

    fn idx(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    #[test]
    fn initial_black_legal_moves_are_four_expected_squares() {
        let moves = placeable_cells(&Board::new(), Side::Black, &PlacedCounts::new());

        assert_eq!(
            moves,
            vec![
                Move::new(2, 3),
                Move::new(3, 2),
                Move::new(4, 5),
                Move::new(5, 4),
            ]
        );
    }

    #[test]
    fn occupied_square_is_never_placeable() {
        assert!(!is_placeable(&Board::new(), Side::Black, 3, 3));
        assert!(!is_placeable(&Board::new(), Side::White, 3, 4));
    }

    #[test]
    fn exhausted_side_has_no_cells_regardless_of_geometry() {
        let board = Board::new();
        let black_done = PlacedCounts {
            black: MAX_PLACEMENTS,
            white: 10,
        };

        assert!(placeable_cells(&board, Side::Black, &black_done).is_empty());
        assert_eq!(placeable_cells(&board, Side::White, &black_done).len(), 4);
        assert_ne!(legal_mask(&board, Side::Black), 0);
    }

    #[test]
    fn side_without_captures_gets_empty_list_below_cap() {
        let black = bit(idx(0, 1));
        let white = FULL_BOARD ^ bit(idx(0, 0)) ^ black;
        let board = Board::from_bitboards(black, white);

        assert!(placeable_cells(&board, Side::Black, &PlacedCounts::new()).is_empty());
        assert_eq!(
            placeable_cells(&board, Side::White, &PlacedCounts::new()),
            vec![Move::new(0, 0)]
        );
    }

    #[test]
    fn cell_list_matches_is_placeable_along_a_game() {
        let mut board = Board::new();
        let mut side = Side::Black;
        let counts = PlacedCounts::new();

        for _ in 0..20 {
            for s in [Side::Black, Side::White] {
                let listed = placeable_cells(&board, s, &counts);
                let expected: Vec<Move> = (0..NUM_SQUARES)
                    .map(Move::from_index)
                    .filter(|m| is_placeable(&board, s, m.row as usize, m.col as usize))
                    .collect();
                assert_eq!(listed, expected);
            }

            let moves = placeable_cells(&board, side, &counts);
            if let Some(last) = moves.last() {
                board = play(&board, side, last.row as usize, last.col as usize);
            }
            side = side.opponent();
        }
    }
}
