//! Observer hook for whatever renders the application state.

use crate::state::AppState;

/// Which part of the state a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The active corpus was replaced.
    Corpus,
    /// A different set or context became visible, or its order changed.
    Selection,
    Progress,
    Bookmarks,
    Preferences,
}

/// Invoked by the controller after every state transition.
pub trait StateObserver {
    fn on_change(&self, state: &AppState, change: Change);
}
