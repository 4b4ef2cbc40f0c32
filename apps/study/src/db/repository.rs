//! Repository pattern over the local key-value store.

use crate::db::error::DbError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::path::Path;
use vocab_core::types::{Preferences, ProgressRecord, Theme};

type Result<T> = std::result::Result<T, DbError>;

pub const PROGRESS_KEY: &str = "vocab_progress";
pub const THEME_KEY: &str = "vocab_theme";
pub const SHUFFLE_KEY: &str = "vocab_shuffle";
pub const BOOKMARKS_KEY: &str = "vocab_bookmarks";
pub const ACTIVE_TAB_KEY: &str = "vocab_active_tab";

/// String key-value storage with last-writer-wins semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Repository for the progress ledger.
pub trait ProgressRepository {
    fn load_progress(&self) -> Result<BTreeMap<String, ProgressRecord>>;
    fn save_progress(&self, records: &BTreeMap<String, ProgressRecord>) -> Result<()>;
    fn clear_progress(&self) -> Result<()>;
}

/// Repository for bookmark keys.
pub trait BookmarkRepository {
    fn load_bookmarks(&self) -> Result<Vec<String>>;
    fn save_bookmarks(&self, keys: &[String]) -> Result<()>;
}

/// Repository for UI preferences.
pub trait PreferencesRepository {
    fn load_preferences(&self) -> Result<Preferences>;
    fn save_theme(&self, theme: Theme) -> Result<()>;
    fn save_shuffle(&self, shuffle: bool) -> Result<()>;
    fn save_active_tab(&self, tab: &str) -> Result<()>;
}

/// SQLite implementation of the repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SCHEMA_VERSION)?;
        Ok(())
    }

    /// Highest schema version recorded in the database.
    pub fn schema_version(&self) -> Result<i32> {
        let version: i32 = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
        Ok(version)
    }

    /// Run `f` inside one transaction; any error rolls every write back.
    pub fn transaction<T>(&self, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }

    /// Read and decode a JSON value, treating corrupt data as absent.
    fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get_item(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring corrupt stored value");
                Ok(None)
            }
        }
    }
}

impl KeyValueStore for SqliteRepository {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}

impl ProgressRepository for SqliteRepository {
    fn load_progress(&self) -> Result<BTreeMap<String, ProgressRecord>> {
        Ok(self.get_json(PROGRESS_KEY)?.unwrap_or_default())
    }

    fn save_progress(&self, records: &BTreeMap<String, ProgressRecord>) -> Result<()> {
        self.set_item(PROGRESS_KEY, &serde_json::to_string(records)?)
    }

    fn clear_progress(&self) -> Result<()> {
        self.remove_item(PROGRESS_KEY)
    }
}

impl BookmarkRepository for SqliteRepository {
    fn load_bookmarks(&self) -> Result<Vec<String>> {
        Ok(self.get_json(BOOKMARKS_KEY)?.unwrap_or_default())
    }

    fn save_bookmarks(&self, keys: &[String]) -> Result<()> {
        self.set_item(BOOKMARKS_KEY, &serde_json::to_string(keys)?)
    }
}

impl PreferencesRepository for SqliteRepository {
    fn load_preferences(&self) -> Result<Preferences> {
        let theme = match self.get_item(THEME_KEY)?.as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        };
        let shuffle = self.get_item(SHUFFLE_KEY)?.as_deref() == Some("1");
        let active_tab = self.get_item(ACTIVE_TAB_KEY)?;

        Ok(Preferences {
            theme,
            shuffle,
            active_tab,
        })
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        match theme {
            Theme::Light => self.set_item(THEME_KEY, Theme::Light.as_str()),
            Theme::Dark => self.remove_item(THEME_KEY),
        }
    }

    fn save_shuffle(&self, shuffle: bool) -> Result<()> {
        self.set_item(SHUFFLE_KEY, if shuffle { "1" } else { "0" })
    }

    fn save_active_tab(&self, tab: &str) -> Result<()> {
        self.set_item(ACTIVE_TAB_KEY, tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_value_roundtrip() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert_eq!(repo.schema_version().unwrap(), super::super::schema::SCHEMA_VERSION);
        assert_eq!(repo.get_item("missing").unwrap(), None);

        repo.set_item("k", "one").unwrap();
        repo.set_item("k", "two").unwrap();
        assert_eq!(repo.get_item("k").unwrap().as_deref(), Some("two"));

        repo.remove_item("k").unwrap();
        assert_eq!(repo.get_item("k").unwrap(), None);
        repo.remove_item("k").unwrap();
    }

    #[test]
    fn test_progress_shape() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let mut records = BTreeMap::new();
        records.insert(
            "cat".to_string(),
            ProgressRecord {
                answer: "kat".to_string(),
                is_correct: Some(true),
                timestamp: Some(42),
            },
        );
        repo.save_progress(&records).unwrap();

        let raw = repo.get_item(PROGRESS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"cat":{"answer":"kat","isCorrect":true,"timestamp":42}}"#);
        assert_eq!(repo.load_progress().unwrap(), records);

        repo.clear_progress().unwrap();
        assert!(repo.load_progress().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_values_are_treated_as_absent() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.set_item(PROGRESS_KEY, "{not json").unwrap();
        repo.set_item(BOOKMARKS_KEY, "42").unwrap();
        assert!(repo.load_progress().unwrap().is_empty());
        assert!(repo.load_bookmarks().unwrap().is_empty());
    }

    #[test]
    fn test_failed_transaction_rolls_back() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.save_bookmarks(&["a|||b".to_string()]).unwrap();

        let result: Result<()> = repo.transaction(|repo| {
            repo.save_progress(&BTreeMap::from([(
                "cat".to_string(),
                ProgressRecord::default(),
            )]))?;
            repo.save_bookmarks(&[])?;
            Err(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
        });
        assert!(result.is_err());

        assert!(repo.load_progress().unwrap().is_empty());
        assert_eq!(repo.load_bookmarks().unwrap(), vec!["a|||b".to_string()]);

        repo.transaction(|repo| repo.save_bookmarks(&[])).unwrap();
        assert!(repo.load_bookmarks().unwrap().is_empty());
    }

    #[test]
    fn test_preferences() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert_eq!(repo.load_preferences().unwrap(), Preferences::default());

        repo.save_theme(Theme::Light).unwrap();
        repo.save_shuffle(true).unwrap();
        repo.save_active_tab("practice").unwrap();
        assert_eq!(repo.get_item(SHUFFLE_KEY).unwrap().as_deref(), Some("1"));

        let prefs = repo.load_preferences().unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert!(prefs.shuffle);
        assert_eq!(prefs.active_tab.as_deref(), Some("practice"));

        repo.save_theme(Theme::Dark).unwrap();
        assert_eq!(repo.get_item(THEME_KEY).unwrap(), None);
    }
}
