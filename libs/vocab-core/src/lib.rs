//! Core vocabulary library shared by the study application and its front-ends.
//!
//! Provides:
//! - Answer normalization and slash-delimited variant checking
//! - Paginated, optionally shuffled views over the active word-pair corpus
//! - Progress ledger and bookmark set (in-memory mirrors of local storage)
//! - Corpus upload parsing and progress bundle import/export
//! - Search scoring and the built-in word and context sets
//! - The matching-tiles game state machine

pub mod bookmarks;
pub mod bundle;
pub mod defaults;
pub mod error;
pub mod game;
pub mod matching;
pub mod normalize;
pub mod pagination;
pub mod parser;
pub mod progress;
pub mod search;
pub mod types;

pub use bookmarks::BookmarkSet;
pub use bundle::{parse_bundle, ImportedBundle, ProgressBundle, BUNDLE_VERSION};
pub use defaults::{default_words, ContextCatalog};
pub use error::{ImportError, Result, UploadError};
pub use game::{GameTile, MatchingGame, RoundMode, Selection, TileState};
pub use matching::{check_answer, is_accepted};
pub use normalize::normalize;
pub use pagination::{PairStore, DEFAULT_PAGE_SIZE};
pub use progress::{ProgressLedger, ProgressSummary};
pub use search::{search, SearchHit};
pub use types::{AnswerStatus, PageSelection, Preferences, ProgressRecord, Theme, WordPair};
