//! Corpus, set and context commands.

use super::{CommandError, CommandResult};
use crate::state::{AppState, ViewMode};
use crate::view::Change;
use serde::Serialize;
use std::fs;
use std::path::Path;
use vocab_core::types::PageSelection;
use vocab_core::{default_words, parser, SearchHit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadSummary {
    pub imported: usize,
    pub page_count: usize,
}

/// What the set selector shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetInfo {
    /// "Set 2 of 3", "All words" or the context name.
    pub label: String,
    pub size: usize,
    pub page_count: usize,
    pub shuffle: bool,
}

/// Load a two-column table from disk as the new corpus.
pub fn upload_file(state: &mut AppState, path: &Path) -> CommandResult<UploadSummary> {
    let content = fs::read_to_string(path)?;
    let summary = load_corpus(state, &content)?;
    tracing::info!(path = %path.display(), words = summary.imported, "corpus uploaded");
    Ok(summary)
}

/// Parse `content` and make it the corpus.
///
/// On any rejection the previous corpus stays loaded.
pub fn load_corpus(state: &mut AppState, content: &str) -> CommandResult<UploadSummary> {
    let pairs = parser::parse(content).inspect_err(|e| {
        tracing::warn!(error = %e, "upload rejected");
    })?;
    state.store.load(pairs)?;
    state.mode = ViewMode::Pages;
    state.notify(Change::Corpus);

    Ok(UploadSummary {
        imported: state.store.len(),
        page_count: state.store.page_count(),
    })
}

/// Go back to the built-in word list.
pub fn load_default_words(state: &mut AppState) -> CommandResult<UploadSummary> {
    state.store.load(default_words())?;
    state.mode = ViewMode::Pages;
    tracing::info!(words = state.store.len(), "default words loaded");
    state.notify(Change::Corpus);

    Ok(UploadSummary {
        imported: state.store.len(),
        page_count: state.store.page_count(),
    })
}

pub fn select_set(state: &mut AppState, selection: PageSelection) -> SetInfo {
    state.store.select_page(selection);
    show_pages(state)
}

pub fn next_set(state: &mut AppState) -> SetInfo {
    state.store.next();
    show_pages(state)
}

pub fn prev_set(state: &mut AppState) -> SetInfo {
    state.store.prev();
    show_pages(state)
}

fn show_pages(state: &mut AppState) -> SetInfo {
    state.mode = ViewMode::Pages;
    state.notify(Change::Selection);
    set_info(state)
}

pub fn set_info(state: &AppState) -> SetInfo {
    let label = match &state.mode {
        ViewMode::Context(name) => name.clone(),
        ViewMode::Pages => match state.store.selection() {
            PageSelection::All => "All words".to_string(),
            PageSelection::Page(page) => {
                format!("Set {page} of {}", state.store.page_count())
            }
        },
    };

    SetInfo {
        label,
        size: state.current_view().len(),
        page_count: state.store.page_count(),
        shuffle: state.store.shuffle(),
    }
}

pub fn list_contexts(state: &AppState) -> Vec<String> {
    state.contexts.names()
}

/// Show the phrases of one context set.
pub fn select_context(state: &mut AppState, name: &str) -> CommandResult<SetInfo> {
    if !state.contexts.contains(name) {
        return Err(CommandError::UnknownContext(name.to_string()));
    }
    state.context_view = state.contexts.pairs(name);
    state.mode = ViewMode::Context(name.to_string());
    tracing::debug!(context = name, phrases = state.context_view.len(), "context selected");
    state.notify(Change::Selection);
    Ok(set_info(state))
}

/// Search the corpus and the context catalogue, best matches first.
pub fn search(state: &AppState, query: &str) -> Vec<SearchHit> {
    vocab_core::search(query, state.store.pairs().iter().chain(state.contexts.all_pairs()))
}
