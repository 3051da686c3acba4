//! Ray walks over the eight compass directions.
//!
//! Legality and flip resolution both go through [`rays`], so a ray that
//! makes a move legal is exactly a ray that flips tiles.

use crate::board::{BOARD_SIZE, Board, bit, in_bounds};
use crate::types::Side;

pub(crate) const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Outcome of walking one direction away from an origin square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ray {
    /// Contiguous opponent squares met before the walk stopped.
    pub run: u64,
    /// The run was terminated by a tile of the scanning side.
    pub closed: bool,
}

impl Ray {
    /// A closed ray with at least one opponent tile in its run.
    pub fn captures(&self) -> bool {
        self.closed && self.run != 0
    }
}

/// Walks from `(row, col)` in direction `(dr, dc)` for `side`. The origin
/// square itself is never inspected.
pub(crate) fn cast(board: &Board, side: Side, row: usize, col: usize, (dr, dc): (i32, i32)) -> Ray {
    let me = board.bits(side);
    let opp = board.bits(side.opponent());

    let mut r = row as i32 + dr;
    let mut c = col as i32 + dc;
    let mut run = 0u64;

    while in_bounds(r, c) {
        let square = bit((r as usize) * BOARD_SIZE + c as usize);
        if (opp & square) != 0 {
            run |= square;
        } else if (me & square) != 0 {
            return Ray { run, closed: true };
        } else {
            break;
        }

        r += dr;
        c += dc;
    }

    Ray { run, closed: false }
}

pub(crate) fn rays(board: &Board, side: Side, row: usize, col: usize) -> impl Iterator<Item = Ray> + '_ {
    DIRECTIONS
        .into_iter()
        .map(move |dir| cast(board, side, row, col, dir))
}

/// Union of every capturing run around `(row, col)`.
pub(crate) fn captures(board: &Board, side: Side, row: usize, col: usize) -> u64 {
    rays(board, side, row, col)
        .filter(Ray::captures)
        .fold(0u64, |acc, ray| acc | ray.run)
}
