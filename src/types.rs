use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Tiles a side may place over a whole game (64 cells split evenly).
pub const MAX_PLACEMENTS: u8 = 32;
const INITIAL_PLACEMENTS: u8 = 2;

/// One of the two competing colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// `+1` for black, `-1` for white.
    pub fn sign(self) -> i32 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = -1,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }
}

/// A board coordinate, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub(crate) fn from_index(pos: usize) -> Self {
        Self {
            row: (pos / 8) as u8,
            col: (pos % 8) as u8,
        }
    }
}

/// Number of tiles each side has put on the board so far, the four
/// starting tiles included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCounts {
    pub black: u8,
    pub white: u8,
}

impl PlacedCounts {
    pub fn new() -> Self {
        Self {
            black: INITIAL_PLACEMENTS,
            white: INITIAL_PLACEMENTS,
        }
    }

    /// Counters supplied from outside the engine, rejected above the cap.
    pub fn checked(black: u8, white: u8) -> Result<Self> {
        let counts = Self { black, white };
        for side in [Side::Black, Side::White] {
            let count = counts.get(side);
            if count > MAX_PLACEMENTS {
                return Err(GameError::InvalidPlacedCount {
                    side,
                    count,
                    max: MAX_PLACEMENTS,
                });
            }
        }
        Ok(counts)
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    pub fn is_exhausted(&self, side: Side) -> bool {
        self.get(side) >= MAX_PLACEMENTS
    }

    /// Returns the counters after `side` placed one more tile.
    pub fn record(self, side: Side) -> Self {
        assert!(
            !self.is_exhausted(side),
            "{side:?} already placed {MAX_PLACEMENTS} tiles"
        );
        match side {
            Side::Black => Self {
                black: self.black + 1,
                ..self
            },
            Side::White => Self {
                white: self.white + 1,
                ..self
            },
        }
    }
}

impl Default for PlacedCounts {
    fn default() -> Self {
        Self::new()
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cells: 0 empty, 1 black, -1 white.
    pub board: Vec<i8>,
    pub current_player: Side,
    pub black_count: u8,
    pub white_count: u8,
    pub placed: PlacedCounts,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: list of flipped positions (0..=63).
    /// - Pass: must be an empty list.
    pub flipped: Vec<u8>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` on a tie.
    pub winner: Option<Side>,
    pub black_count: u8,
    pub white_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_negates_sign() {
        for side in [Side::Black, Side::White] {
            assert_eq!(side.opponent().sign(), -side.sign());
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn cell_discriminants_match_side_signs() {
        assert_eq!(Cell::Empty as i8, 0);
        assert_eq!(Cell::Black as i8, Side::Black.sign() as i8);
        assert_eq!(Cell::White as i8, Side::White.sign() as i8);
    }

    #[test]
    fn placed_counts_start_at_two_and_record_one_side() {
        let counts = PlacedCounts::new().record(Side::White);

        assert_eq!(counts.get(Side::Black), 2);
        assert_eq!(counts.get(Side::White), 3);
    }

    #[test]
    fn checked_counts_reject_values_above_cap() {
        assert_eq!(
            PlacedCounts::checked(MAX_PLACEMENTS, 5),
            Ok(PlacedCounts {
                black: MAX_PLACEMENTS,
                white: 5
            })
        );
        assert_eq!(
            PlacedCounts::checked(2, 40),
            Err(GameError::InvalidPlacedCount {
                side: Side::White,
                count: 40,
                max: MAX_PLACEMENTS
            })
        );
    }

    #[test]
    #[should_panic(expected = "already placed")]
    fn placed_counts_never_exceed_cap() {
        let counts = PlacedCounts {
            black: MAX_PLACEMENTS,
            white: 2,
        };
        let _ = counts.record(Side::Black);
    }
}
