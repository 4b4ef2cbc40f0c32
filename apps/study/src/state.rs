//! Application state.

use crate::audio::{AudioQueue, SpeechEngine};
use crate::config::Config;
use crate::db::{BookmarkRepository, DbError, PreferencesRepository, ProgressRepository, SqliteRepository};
use crate::game::GameSession;
use crate::view::{Change, StateObserver};
use std::sync::Arc;
use vocab_core::types::{Preferences, WordPair};
use vocab_core::{default_words, BookmarkSet, ContextCatalog, PairStore, ProgressLedger};

/// What the study views are showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// A page (or "all") of the uploaded or default corpus.
    Pages,
    /// One named context set from the catalogue.
    Context(String),
}

/// Global application state.
///
/// Owns every in-memory mirror of local storage. Command functions mutate it
/// and persist the touched structure immediately afterwards.
pub struct AppState {
    pub repository: SqliteRepository,
    pub config: Config,
    pub store: PairStore,
    pub ledger: ProgressLedger,
    pub bookmarks: BookmarkSet,
    pub preferences: Preferences,
    pub contexts: ContextCatalog,
    pub mode: ViewMode,
    pub(crate) context_view: Vec<WordPair>,
    pub audio: AudioQueue,
    pub game: GameSession,
    observer: Option<Box<dyn StateObserver>>,
}

impl AppState {
    /// Load persisted state and the default word list.
    pub fn new(
        repository: SqliteRepository,
        config: Config,
        engine: Arc<dyn SpeechEngine>,
    ) -> Result<Self, DbError> {
        let store = PairStore::new(config.page_size);
        let game = GameSession::new(config.game);
        Self::assemble(repository, config, engine, store, game)
    }

    /// Same as [`AppState::new`] with fixed shuffle seeds (for testing).
    pub fn with_seed(
        repository: SqliteRepository,
        config: Config,
        engine: Arc<dyn SpeechEngine>,
        seed: u64,
    ) -> Result<Self, DbError> {
        let store = PairStore::with_seed(config.page_size, seed);
        let game = GameSession::with_seed(config.game, seed);
        Self::assemble(repository, config, engine, store, game)
    }

    fn assemble(
        repository: SqliteRepository,
        config: Config,
        engine: Arc<dyn SpeechEngine>,
        mut store: PairStore,
        game: GameSession,
    ) -> Result<Self, DbError> {
        let ledger = ProgressLedger::from_records(repository.load_progress()?);
        let bookmarks = BookmarkSet::from_keys(repository.load_bookmarks()?);
        let preferences = repository.load_preferences()?;

        store.set_shuffle(preferences.shuffle);
        // The built-in list is never empty.
        let _ = store.load(default_words());

        let audio = AudioQueue::new(engine, config.voices.clone(), config.audio);

        tracing::info!(
            records = ledger.len(),
            bookmarks = bookmarks.len(),
            words = store.len(),
            "state loaded"
        );

        Ok(Self {
            repository,
            config,
            store,
            ledger,
            bookmarks,
            preferences,
            contexts: ContextCatalog::builtin(),
            mode: ViewMode::Pages,
            context_view: Vec::new(),
            audio,
            game,
            observer: None,
        })
    }

    pub fn set_observer(&mut self, observer: Box<dyn StateObserver>) {
        self.observer = Some(observer);
    }

    /// Pairs in the visible set.
    pub fn current_view(&self) -> &[WordPair] {
        match self.mode {
            ViewMode::Pages => self.store.view(),
            ViewMode::Context(_) => &self.context_view,
        }
    }

    /// Denominator of the global progress figure.
    pub fn corpus_size(&self) -> usize {
        match self.mode {
            ViewMode::Pages => self.store.len(),
            ViewMode::Context(_) => self.contexts.len(),
        }
    }

    pub(crate) fn notify(&mut self, change: Change) {
        if let Some(observer) = self.observer.take() {
            observer.on_change(self, change);
            self.observer = Some(observer);
        }
    }
}
