//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel joining source and target in a bookmark key.
pub const BOOKMARK_DELIMITER: &str = "|||";

/// A vocabulary entry.
///
/// `target` may hold several accepted answers separated by `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub source: String,
    pub target: String,
}

impl WordPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Opaque key identifying this pair in the bookmark set.
    pub fn bookmark_key(&self) -> String {
        format!("{}{}{}", self.source, BOOKMARK_DELIMITER, self.target)
    }

    /// Rebuild a pair from a bookmark key.
    pub fn from_bookmark_key(key: &str) -> Option<Self> {
        key.split_once(BOOKMARK_DELIMITER)
            .map(|(source, target)| Self::new(source, target))
    }
}

/// Which slice of the corpus is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSelection {
    /// 1-indexed page.
    Page(usize),
    All,
}

impl Default for PageSelection {
    fn default() -> Self {
        Self::Page(1)
    }
}

impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::All => f.write_str("all"),
        }
    }
}

impl FromStr for PageSelection {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Page)
    }
}

/// Last answer recorded for one source term.
///
/// Partial updates only write `answer`, so the other fields may be absent
/// or left over from an earlier submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    /// Milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ProgressRecord {
    pub fn is_correct(&self) -> bool {
        self.is_correct.unwrap_or(false)
    }
}

/// Grade of a single practice answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    Correct,
    Incorrect,
    Unanswered,
}

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Dark,
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// User interface preferences kept in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub shuffle: bool,
    pub active_tab: Option<String>,
}
