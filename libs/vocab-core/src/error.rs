//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using UploadError.
pub type Result<T> = std::result::Result<T, UploadError>;

/// Errors that can occur while turning an uploaded table into a corpus.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("empty file")]
    EmptyFile,

    #[error("no valid pairs found; column A must hold the target term and column B the source term")]
    NoValidPairs,
}

/// Errors that can occur while importing a progress bundle.
///
/// Any of these leaves the ledger and bookmarks untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("bundle is not a JSON object")]
    NotAnObject,

    #[error("bundle is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("invalid progress ledger: {0}")]
    InvalidProgress(serde_json::Error),
}
