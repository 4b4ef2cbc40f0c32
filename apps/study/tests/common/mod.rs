//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext owning an application state over a temporary database
//! - A recording speech engine with configurable utterance duration

#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

use vocab_study::audio::{SpeechEngine, SpeechError, Utterance};
use vocab_study::config::Config;
use vocab_study::db::SqliteRepository;
use vocab_study::state::AppState;

/// Speech engine that records every utterance it starts.
pub struct RecordingSpeech {
    duration: Duration,
    fail_on: Option<String>,
    spoken: Mutex<Vec<String>>,
    stops: Mutex<usize>,
}

impl RecordingSpeech {
    pub fn new(duration: Duration) -> Arc<Self> {
        Arc::new(Self {
            duration,
            fail_on: None,
            spoken: Mutex::new(Vec::new()),
            stops: Mutex::new(0),
        })
    }

    /// Engine that errors on one particular text.
    pub fn failing_on(duration: Duration, text: &str) -> Arc<Self> {
        Arc::new(Self {
            duration,
            fail_on: Some(text.to_string()),
            spoken: Mutex::new(Vec::new()),
            stops: Mutex::new(0),
        })
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn stops(&self) -> usize {
        *self.stops.lock().unwrap()
    }
}

#[async_trait]
impl SpeechEngine for RecordingSpeech {
    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.spoken.lock().unwrap().push(utterance.text.clone());
        if self.fail_on.as_deref() == Some(utterance.text.as_str()) {
            return Err(SpeechError::Failed("synthesis error".to_string()));
        }
        tokio::time::sleep(self.duration).await;
        Ok(())
    }

    fn stop(&self) {
        *self.stops.lock().unwrap() += 1;
    }
}

/// Application state over an on-disk database in a temporary directory.
pub struct TestContext {
    pub dir: TempDir,
    pub state: AppState,
    pub speech: Arc<RecordingSpeech>,
}

impl TestContext {
    pub fn new(page_size: usize) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let speech = RecordingSpeech::new(Duration::from_millis(100));
        let state = open(&dir, page_size, speech.clone());
        Self { dir, state, speech }
    }

    pub fn db_path(&self) -> std::path::PathBuf {
        self.dir.path().join("vocab.db")
    }

    /// Reopen the same database, as a restart would.
    pub fn reopen(self) -> Self {
        let Self { dir, state, speech } = self;
        drop(state);
        let state = open(&dir, 50, speech.clone());
        Self { dir, state, speech }
    }
}

fn open(dir: &TempDir, page_size: usize, speech: Arc<RecordingSpeech>) -> AppState {
    let config = Config {
        db_path: dir.path().join("vocab.db"),
        page_size,
        ..Config::default()
    };
    let repository = SqliteRepository::open(&config.db_path).expect("Failed to open database");
    AppState::with_seed(repository, config, speech, 42).expect("Failed to load state")
}
