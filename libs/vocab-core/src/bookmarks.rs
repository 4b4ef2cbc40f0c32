//! Bookmarked pairs.

use crate::types::WordPair;
use std::collections::HashSet;

/// Set of bookmark keys (`source|||target`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    keys: HashSet<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the set from its persisted list.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Add the pair if absent, remove it otherwise. Returns the new membership.
    pub fn toggle(&mut self, pair: &WordPair) -> bool {
        let key = pair.bookmark_key();
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn contains(&self, pair: &WordPair) -> bool {
        self.keys.contains(&pair.bookmark_key())
    }

    /// Bookmarked pairs, ordered by key. Malformed keys are skipped.
    pub fn all(&self) -> Vec<WordPair> {
        self.to_keys()
            .iter()
            .filter_map(|key| WordPair::from_bookmark_key(key))
            .collect()
    }

    /// Sorted key list for persistence.
    pub fn to_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys.iter().cloned().collect();
        keys.sort();
        keys
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
