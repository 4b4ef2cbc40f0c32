//! Commands exposed to the front-end.
//!
//! Every command mutates [`AppState`](crate::state::AppState), persists what
//! it touched and then notifies the observer.

pub mod audio;
pub mod bookmarks;
pub mod deck;
pub mod game;
pub mod progress;
pub mod settings;
pub mod study;

use thiserror::Error;

pub use audio::{play_bookmarks, play_current_set, play_pair, stop_audio};
pub use bookmarks::{clear_bookmarks, list_bookmarks, toggle_bookmark};
pub use deck::{
    list_contexts, load_corpus, load_default_words, next_set, prev_set, search, select_context,
    select_set, set_info, upload_file, SetInfo, UploadSummary,
};
pub use game::{click_tile, game_snapshot, set_game_mode, start_game, stop_game};
pub use progress::{
    export_bundle, export_progress, import_progress, import_progress_file, reset_progress,
    ImportSummary,
};
pub use settings::{preferences, set_active_tab, set_shuffle, set_theme, toggle_shuffle, toggle_theme};
pub use study::{
    progress_summary, restore_practice, save_partial, score, study_rows, submit_practice,
    PracticeOutcome, PracticeReport, PracticeTarget, SetScore, StudyRow,
};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Storage(#[from] crate::db::DbError),

    #[error("upload rejected: {0}")]
    Upload(#[from] vocab_core::UploadError),

    #[error("import rejected: {0}")]
    Import(#[from] vocab_core::ImportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown context: {0}")]
    UnknownContext(String),
}

pub type CommandResult<T> = Result<T, CommandError>;
