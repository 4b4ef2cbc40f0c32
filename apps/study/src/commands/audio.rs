//! Playback commands.
//!
//! Playback runs on its own task so the front-end stays responsive; these
//! functions must be called from within a Tokio runtime.

use crate::audio::PlaybackOutcome;
use crate::state::AppState;
use tokio::task::JoinHandle;
use vocab_core::types::WordPair;

pub fn play_current_set(state: &AppState) -> JoinHandle<PlaybackOutcome> {
    spawn_list(state, state.current_view().to_vec())
}

pub fn play_bookmarks(state: &AppState) -> JoinHandle<PlaybackOutcome> {
    spawn_list(state, state.bookmarks.all())
}

pub fn play_pair(state: &AppState, pair: WordPair) -> JoinHandle<PlaybackOutcome> {
    let audio = state.audio.clone();
    tokio::spawn(async move { audio.play_pair(pair).await })
}

pub fn stop_audio(state: &AppState) {
    state.audio.stop();
}

fn spawn_list(state: &AppState, pairs: Vec<WordPair>) -> JoinHandle<PlaybackOutcome> {
    let audio = state.audio.clone();
    tokio::spawn(async move { audio.play_list(pairs).await })
}
