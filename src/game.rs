use serde::Deserialize;

use crate::ai::NegamaxSelector;
use crate::board::{BOARD_SIZE, Board};
use crate::error::{GameError, Result};
use crate::eval::{is_terminal, winner};
use crate::flip::play;
use crate::legal::placeable_cells;
use crate::types::{GameResult, GameState, Move, PlacedCounts, Side};

pub const DEFAULT_DEPTH: u8 = 3;
pub const MAX_DEPTH: u8 = 8;

pub trait MoveSelector: Send + Sync {
    fn select_move(
        &self,
        board: &Board,
        side: Side,
        counts: &PlacedCounts,
        depth: u8,
    ) -> Option<Move>;
}

/// Session settings supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Search plies for the bot; the difficulty knob.
    pub depth: u8,
    pub human_side: Side,
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(GameError::InvalidDepth {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            human_side: Side::Black,
        }
    }
}

/// One human-versus-bot game. Black always moves first.
pub struct GameInstance {
    board: Board,
    counts: PlacedCounts,
    pub current_player: Side,
    pub config: GameConfig,
    pub is_game_over: bool,
    pub is_pass: bool,
    pub flipped: Vec<u8>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(config: GameConfig, selector: Box<dyn MoveSelector>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            board: Board::new(),
            counts: PlacedCounts::new(),
            current_player: Side::Black,
            config,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            selector,
        })
    }

    pub fn new_with_default_selector(config: GameConfig) -> Result<Self> {
        Self::new(config, Box::new(NegamaxSelector))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn counts(&self) -> &PlacedCounts {
        &self.counts
    }

    pub fn bot_side(&self) -> Side {
        self.config.human_side.opponent()
    }

    /// Human move.
    pub fn place(&mut self, row: u8, col: u8) -> Result<()> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.current_player != self.config.human_side {
            return Err(GameError::NotYourTurn);
        }
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err(GameError::OutOfRange { row, col });
        }

        self.apply_move(Move::new(row, col), self.config.human_side)
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        !self.get_legal_moves().is_empty()
    }

    /// Forfeits the turn of the side to move. Only allowed without a legal
    /// placement.
    pub fn pass(&mut self) -> Result<()> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.has_legal_moves_for_current() {
            return Err(GameError::MustPlay);
        }

        log::debug!("{:?} passes", self.current_player);
        self.is_pass = true;
        self.flipped.clear();
        self.current_player = self.current_player.opponent();

        if is_terminal(&self.board, &self.counts) {
            self.end_game();
        }
        Ok(())
    }

    pub fn end_game(&mut self) {
        self.is_game_over = true;
        let (black, white) = self.board.count();
        log::info!("game over: black={black} white={white}");
    }

    pub fn do_ai_move(&mut self) -> Result<()> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        let side = self.bot_side();
        if self.current_player != side {
            return Err(GameError::NotYourTurn);
        }
        if !self.has_legal_moves_for_current() {
            return Err(GameError::NoLegalMoves);
        }

        let selected = self
            .selector
            .select_move(&self.board, side, &self.counts, self.config.depth)
            .ok_or(GameError::SelectorFailed)?;

        if selected.row as usize >= BOARD_SIZE || selected.col as usize >= BOARD_SIZE {
            return Err(GameError::OutOfRange {
                row: selected.row,
                col: selected.col,
            });
        }

        self.apply_move(selected, side)
    }

    pub fn get_legal_moves(&self) -> Vec<Move> {
        placeable_cells(&self.board, self.current_player, &self.counts)
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            black_count,
            white_count,
            placed: self.counts,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: winner(&self.board),
            black_count,
            white_count,
        }
    }

    fn apply_move(&mut self, mv: Move, side: Side) -> Result<()> {
        let legal = placeable_cells(&self.board, side, &self.counts);
        if !legal.contains(&mv) {
            log::warn!("{side:?} rejected at ({}, {})", mv.row, mv.col);
            return Err(GameError::IllegalMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let next = play(&self.board, side, mv.row as usize, mv.col as usize);
        let flips = next.bits(side) & self.board.bits(side.opponent());
        log::debug!(
            "{side:?} plays ({}, {}) flipping {}",
            mv.row,
            mv.col,
            flips.count_ones()
        );

        self.board = next;
        self.counts = self.counts.record(side);
        self.is_pass = false;
        self.flipped = bitmask_to_indices(flips);
        self.current_player = side.opponent();

        if is_terminal(&self.board, &self.counts) {
            self.end_game();
        }

        Ok(())
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Side) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
    }

    #[cfg(test)]
    fn set_counts_for_test(&mut self, counts: PlacedCounts) {
        self.counts = counts;
    }
}

fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        let idx = bits.trailing_zeros() as u8;
        out.push(idx);
        bits &= bits - 1;
    }

    out
}
