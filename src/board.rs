use crate::error::{GameError, Result};
use crate::types::{Cell, Side};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Othello board state represented by two bitboards.
///
/// Bit `row * 8 + col` is set in `black` or `white` when that side owns
/// the square. The type is `Copy`: assigning a board yields an independent
/// snapshot, which is what the search relies on when it branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// A board with all 64 squares empty.
    pub fn empty() -> Self {
        Self { black: 0, white: 0 }
    }

    pub fn from_bitboards(black: u64, white: u64) -> Self {
        assert_eq!(black & white, 0, "a square cannot hold both colors");
        Self { black, white }
    }

    /// Parses 64 row-major cells (0 empty, 1 black, -1 white).
    pub fn from_cells(cells: &[i8]) -> Result<Self> {
        if cells.len() != NUM_SQUARES {
            return Err(GameError::InvalidCellCount { len: cells.len() });
        }

        let mut board = Self::empty();
        for (pos, &value) in cells.iter().enumerate() {
            match value {
                0 => {}
                1 => board.black |= bit(pos),
                -1 => board.white |= bit(pos),
                _ => return Err(GameError::InvalidCellValue { index: pos, value }),
            }
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        let square = bit(square_index(row, col));
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Cell::Empty
    }

    /// Overwrites one square of this board only.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let square = bit(square_index(row, col));
        self.black &= !square;
        self.white &= !square;
        match cell {
            Cell::Empty => {}
            Cell::Black => self.black |= square,
            Cell::White => self.white |= square,
        }
    }

    /// Returns a new board with `side`'s tile written at `(row, col)`.
    /// No captures are resolved.
    pub fn with_tile(&self, row: usize, col: usize, side: Side) -> Self {
        let mut next = *self;
        next.set(row, col, side.cell());
        next
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[i8; 64]` where 0=empty, 1=black, -1=white.
    pub fn to_array(&self) -> [i8; NUM_SQUARES] {
        let mut board = [0i8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self.cell(pos / BOARD_SIZE, pos % BOARD_SIZE) as i8;
        }
        board
    }

    /// Occupancy mask of one side.
    pub(crate) fn bits(&self, side: Side) -> u64 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    pub(crate) fn occupied(&self) -> u64 {
        self.black | self.white
    }

    /// Moves every square in `mask` to `side`.
    pub(crate) fn with_owner(&self, mask: u64, side: Side) -> Self {
        match side {
            Side::Black => Self {
                black: self.black | mask,
                white: self.white & !mask,
            },
            Side::White => Self {
                white: self.white | mask,
                black: self.black & !mask,
            },
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

pub(crate) fn square_index(row: usize, col: usize) -> usize {
    assert!(
        row < BOARD_SIZE && col < BOARD_SIZE,
        "square ({row}, {col}) is off the board"
    );
    row * BOARD_SIZE + col
}

pub(crate) fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
