//! Browser-facing bindings. Values cross the boundary as plain JS objects.

use once_cell::sync::OnceCell;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::ai::search::bot_move as search_bot_move;
use crate::board::Board;
use crate::error::{GameError, Result};
use crate::game::{GameConfig, GameInstance, MAX_DEPTH};
use crate::types::{PlacedCounts, Side};

static LOGGER: OnceCell<()> = OnceCell::new();

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Routes `log` output to the browser console. Safe to call repeatedly.
#[wasm_bindgen]
pub fn init_logging() {
    LOGGER.get_or_init(install_console_logger);
}

#[cfg(target_arch = "wasm32")]
fn install_console_logger() {
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        // Another logger owns the facade; report through it.
        log::warn!("console logger not installed: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install_console_logger() {}

/// The standard opening position as 64 row-major cells.
#[wasm_bindgen]
pub fn initial_board() -> Vec<i8> {
    Board::new().to_array().to_vec()
}

/// Searches `cells` for `side` (1 black, -1 white). Returns `{row, col}` or
/// `null` when the side has to pass.
#[wasm_bindgen]
pub fn bot_move(
    cells: &[i8],
    side: i8,
    black_placed: u8,
    white_placed: u8,
    depth: u8,
) -> std::result::Result<JsValue, JsError> {
    let board = Board::from_cells(cells)?;
    let side = parse_side(side)?;
    GameConfig {
        depth,
        human_side: side.opponent(),
    }
    .validate()?;

    let counts = PlacedCounts::checked(black_placed, white_placed)?;
    let started = Instant::now();
    let mv = search_bot_move(&board, side, &counts, depth);
    log::debug!("bot_move depth={depth} took {:?}", started.elapsed());

    to_js(&mv)
}

#[wasm_bindgen]
pub struct WasmGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config` is `{ depth?: number, human_side?: "black" | "white" }`;
    /// `undefined` selects the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> std::result::Result<WasmGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|err| GameError::InvalidConfig(err.to_string()))?
        };
        log::debug!("new game: depth={} (max {MAX_DEPTH})", config.depth);

        Ok(Self {
            inner: GameInstance::new_with_default_selector(config)?,
        })
    }

    pub fn place(&mut self, row: u8, col: u8) -> std::result::Result<(), JsError> {
        Ok(self.inner.place(row, col)?)
    }

    pub fn pass(&mut self) -> std::result::Result<(), JsError> {
        Ok(self.inner.pass()?)
    }

    pub fn bot_move(&mut self) -> std::result::Result<(), JsError> {
        let started = Instant::now();
        self.inner.do_ai_move()?;
        log::debug!("bot move took {:?}", started.elapsed());
        Ok(())
    }

    pub fn legal_moves(&self) -> std::result::Result<JsValue, JsError> {
        to_js(&self.inner.get_legal_moves())
    }

    pub fn state(&self) -> std::result::Result<JsValue, JsError> {
        to_js(&self.inner.to_game_state())
    }

    pub fn result(&self) -> std::result::Result<JsValue, JsError> {
        to_js(&self.inner.to_game_result())
    }
}

fn parse_side(value: i8) -> Result<Side> {
    match value {
        1 => Ok(Side::Black),
        -1 => Ok(Side::White),
        _ => Err(GameError::InvalidSide { value }),
    }
}

fn to_js<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value
        .serialize(&serializer)
        .map_err(|err| JsError::new(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_side_accepts_only_unit_signs() {
        assert_eq!(parse_side(1), Ok(Side::Black));
        assert_eq!(parse_side(-1), Ok(Side::White));
        assert_eq!(parse_side(0), Err(GameError::InvalidSide { value: 0 }));
    }

    #[test]
    fn init_logging_is_repeatable() {
        init_logging();
        init_logging();
        assert!(LOGGER.get().is_some());
    }

    #[test]
    fn initial_board_matches_board_model() {
        let cells = initial_board();

        assert_eq!(cells.len(), 64);
        assert_eq!(cells.iter().filter(|&&c| c == 1).count(), 2);
        assert_eq!(cells.iter().filter(|&&c| c == -1).count(), 2);
        assert_eq!(cells[27], -1);
    }
}
