//! Local key-value storage backed by SQLite.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{
    BookmarkRepository, KeyValueStore, PreferencesRepository, ProgressRepository,
    SqliteRepository, ACTIVE_TAB_KEY, BOOKMARKS_KEY, PROGRESS_KEY, SHUFFLE_KEY, THEME_KEY,
};
