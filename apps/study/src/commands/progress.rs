//! Progress bundle import/export and reset.

use super::CommandResult;
use crate::db::{BookmarkRepository, DbError, ProgressRepository};
use crate::state::AppState;
use crate::view::Change;
use serde::Serialize;
use std::fs;
use std::path::Path;
use vocab_core::{parse_bundle, BookmarkSet, ProgressBundle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub records: usize,
    /// `None` when the bundle's bookmarks were not a list and were skipped.
    pub bookmarks: Option<usize>,
}

/// Snapshot the ledger and bookmarks.
pub fn export_bundle(state: &AppState) -> ProgressBundle {
    ProgressBundle::new(state.ledger.records().clone(), state.bookmarks.to_keys())
}

/// Write the bundle as pretty JSON. Returns the number of records written.
pub fn export_progress(state: &AppState, path: &Path) -> CommandResult<usize> {
    let bundle = export_bundle(state);
    let json = bundle.to_json().map_err(DbError::from)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), records = bundle.progress.len(), "progress exported");
    Ok(bundle.progress.len())
}

/// Replace the ledger and bookmarks with an exported bundle.
///
/// Validation happens before anything is touched, so a rejected bundle
/// leaves both structures as they were.
pub fn import_progress(state: &mut AppState, content: &str) -> CommandResult<ImportSummary> {
    let imported = parse_bundle(content).inspect_err(|e| {
        tracing::warn!(error = %e, "import rejected");
    })?;

    let bookmarks = imported.bookmarks.map(BookmarkSet::from_keys);

    state.repository.transaction(|repo| {
        repo.save_progress(&imported.progress)?;
        if let Some(bookmarks) = &bookmarks {
            repo.save_bookmarks(&bookmarks.to_keys())?;
        }
        Ok(())
    })?;

    let summary = ImportSummary {
        records: imported.progress.len(),
        bookmarks: bookmarks.as_ref().map(BookmarkSet::len),
    };
    state.ledger.replace(imported.progress);
    if let Some(bookmarks) = bookmarks {
        state.bookmarks = bookmarks;
        state.notify(Change::Bookmarks);
    } else {
        tracing::warn!("bundle bookmarks are not a list, keeping current bookmarks");
    }
    tracing::info!(records = summary.records, bookmarks = ?summary.bookmarks, "progress imported");
    state.notify(Change::Progress);

    Ok(summary)
}

pub fn import_progress_file(state: &mut AppState, path: &Path) -> CommandResult<ImportSummary> {
    let content = fs::read_to_string(path)?;
    import_progress(state, &content)
}

/// Forget every recorded answer.
pub fn reset_progress(state: &mut AppState) -> CommandResult<()> {
    state.ledger.clear();
    state.repository.clear_progress()?;
    tracing::info!("progress reset");
    state.notify(Change::Progress);
    Ok(())
}
