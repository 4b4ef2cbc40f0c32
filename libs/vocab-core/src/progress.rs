//! Progress ledger: last answer and correctness per source term.
//!
//! One record per distinct source string across the whole corpus, so the same
//! prompt appearing in two sets shares its record.

use crate::matching::check_answer;
use crate::types::{AnswerStatus, ProgressRecord, WordPair};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

/// Global progress figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

/// In-memory mirror of the persisted ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressLedger {
    records: BTreeMap<String, ProgressRecord>,
}

impl ProgressLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: BTreeMap<String, ProgressRecord>) -> Self {
        Self { records }
    }

    /// Upsert only the answer text, keeping any earlier grade and timestamp.
    pub fn record_partial(&mut self, key: &str, answer: &str) {
        self.records.entry(key.to_string()).or_default().answer = answer.to_string();
    }

    /// Overwrite the whole record with a fresh timestamp.
    pub fn record_submission(&mut self, key: &str, answer: &str, is_correct: bool) {
        self.records.insert(
            key.to_string(),
            ProgressRecord {
                answer: answer.to_string(),
                is_correct: Some(is_correct),
                timestamp: Some(Utc::now().timestamp_millis()),
            },
        );
    }

    pub fn read(&self, key: &str) -> Option<&ProgressRecord> {
        self.records.get(key)
    }

    /// Replace every record, as an import does.
    pub fn replace(&mut self, records: BTreeMap<String, ProgressRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &BTreeMap<String, ProgressRecord> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records marked correct, whether or not their term is still loaded.
    pub fn correct_count(&self) -> usize {
        self.records.values().filter(|r| r.is_correct()).count()
    }

    /// Correct records over the configured corpus size, in whole percent.
    pub fn summary(&self, corpus_size: usize) -> ProgressSummary {
        let correct = self.correct_count();
        let total = corpus_size.max(1);
        let percent = (correct as f64 / total as f64 * 100.0).round() as u32;
        ProgressSummary {
            correct,
            total,
            percent,
        }
    }

    /// Correct records among `pairs`, for a per-set score badge.
    pub fn score(&self, pairs: &[WordPair]) -> usize {
        pairs
            .iter()
            .filter(|p| self.read(&p.source).is_some_and(ProgressRecord::is_correct))
            .count()
    }

    /// Stored answer for `pair` and its grade against the pair's target.
    pub fn restore(&self, pair: &WordPair) -> (String, AnswerStatus) {
        match self.read(&pair.source) {
            Some(record) => {
                let status = check_answer(&record.answer, &pair.target);
                (record.answer.clone(), status)
            }
            None => (String::new(), AnswerStatus::Unanswered),
        }
    }
}
