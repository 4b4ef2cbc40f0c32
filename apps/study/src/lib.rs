//! Vocabulary study application: controller, local storage, audio and game
//! runtime around `vocab-core`.

pub mod audio;
pub mod commands;
pub mod config;
pub mod db;
pub mod game;
pub mod state;
pub mod view;

use audio::SpeechEngine;
use config::Config;
use db::SqliteRepository;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Open local storage and load the application state.
pub fn open_state(config: Config, engine: Arc<dyn SpeechEngine>) -> anyhow::Result<AppState> {
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::info!(path = %config.db_path.display(), "opening local storage");

    let repository = SqliteRepository::open(&config.db_path)?;
    Ok(AppState::new(repository, config, engine)?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::audio::{SpeechEngine, SpeechError, Utterance};
    use crate::config::Config;
    use crate::db::SqliteRepository;
    use crate::state::AppState;
    use async_trait::async_trait;
    use std::sync::Arc;

    pub struct SilentSpeech;

    #[async_trait]
    impl SpeechEngine for SilentSpeech {
        async fn speak(&self, _utterance: &Utterance) -> Result<(), SpeechError> {
            Ok(())
        }

        fn stop(&self) {}
    }

    /// In-memory state over the default words.
    pub fn state(page_size: usize) -> AppState {
        let config = Config {
            page_size,
            ..Config::default()
        };
        let repository = SqliteRepository::open_in_memory().unwrap();
        AppState::with_seed(repository, config, Arc::new(SilentSpeech), 7).unwrap()
    }
}
