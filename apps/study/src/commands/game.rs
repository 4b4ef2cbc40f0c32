//! Matching game commands.

use crate::game::GameSnapshot;
use crate::state::AppState;
use vocab_core::{RoundMode, Selection};

/// Reset and start a game over the visible set. Needs a Tokio runtime.
pub fn start_game(state: &AppState, level: usize) -> GameSnapshot {
    state.game.start(level, state.current_view().to_vec())
}

pub fn click_tile(state: &AppState, tile_id: usize) -> Selection {
    state.game.select(tile_id)
}

pub fn set_game_mode(state: &AppState, mode: RoundMode) {
    state.game.set_mode(mode);
}

pub fn game_snapshot(state: &AppState) -> GameSnapshot {
    state.game.snapshot()
}

pub fn stop_game(state: &AppState) {
    state.game.stop();
}
