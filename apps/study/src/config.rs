//! Runtime configuration from the environment.

use std::path::PathBuf;
use std::time::Duration;
use vocab_core::pagination::DEFAULT_PAGE_SIZE;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub page_size: usize,
    pub voices: Voices,
    pub audio: AudioTiming,
    pub game: GameTiming,
}

/// Speech language tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voices {
    /// Used for source terms and the linking word.
    pub source_lang: String,
    pub target_lang: String,
}

impl Default for Voices {
    fn default() -> Self {
        Self {
            source_lang: "en-US".to_string(),
            target_lang: "nl-NL".to_string(),
        }
    }
}

/// Pauses used by the audio queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioTiming {
    /// Settle time after stopping before a list starts.
    pub list_grace: Duration,
    /// Settle time after stopping before a single pair starts.
    pub single_grace: Duration,
    pub between_utterances: Duration,
    pub between_pairs: Duration,
}

impl Default for AudioTiming {
    fn default() -> Self {
        Self {
            list_grace: Duration::from_millis(50),
            single_grace: Duration::from_millis(20),
            between_utterances: Duration::from_millis(50),
            between_pairs: Duration::from_millis(200),
        }
    }
}

/// Delays used by the matching game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTiming {
    pub tick: Duration,
    pub match_feedback: Duration,
    pub mismatch_lockout: Duration,
    pub next_round: Duration,
}

impl Default for GameTiming {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            match_feedback: Duration::from_millis(400),
            mismatch_lockout: Duration::from_millis(800),
            next_round: Duration::from_millis(1000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            page_size: DEFAULT_PAGE_SIZE,
            voices: Voices::default(),
            audio: AudioTiming::default(),
            game: GameTiming::default(),
        }
    }
}

impl Config {
    /// Read `VOCAB_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let db_path = std::env::var("VOCAB_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let page_size = match std::env::var("VOCAB_PAGE_SIZE") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    tracing::warn!(value = %raw, "invalid VOCAB_PAGE_SIZE, using default");
                    defaults.page_size
                }
            },
            Err(_) => defaults.page_size,
        };

        let voices = Voices {
            source_lang: std::env::var("VOCAB_SOURCE_LANG")
                .unwrap_or(defaults.voices.source_lang),
            target_lang: std::env::var("VOCAB_TARGET_LANG")
                .unwrap_or(defaults.voices.target_lang),
        };

        Self {
            db_path,
            page_size,
            voices,
            audio: defaults.audio,
            game: defaults.game,
        }
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-trainer")
        .join("vocab.db")
}
