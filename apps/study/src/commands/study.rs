//! Study listing and typed practice.

use super::CommandResult;
use crate::db::ProgressRepository;
use crate::state::AppState;
use crate::view::Change;
use serde::Serialize;
use vocab_core::types::{AnswerStatus, WordPair};
use vocab_core::{check_answer, ProgressSummary};

/// Which pairs a practice round covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeTarget {
    /// The visible set or context.
    CurrentSet,
    /// Every bookmarked pair.
    Bookmarks,
}

/// One row of the study table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyRow {
    pub pair: WordPair,
    pub bookmarked: bool,
    pub status: AnswerStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeOutcome {
    pub pair: WordPair,
    pub answer: String,
    pub status: AnswerStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeReport {
    pub outcomes: Vec<PracticeOutcome>,
    pub correct: usize,
    pub total: usize,
}

/// Per-set score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetScore {
    pub correct: usize,
    pub total: usize,
}

fn target_pairs(state: &AppState, target: PracticeTarget) -> Vec<WordPair> {
    match target {
        PracticeTarget::CurrentSet => state.current_view().to_vec(),
        PracticeTarget::Bookmarks => state.bookmarks.all(),
    }
}

/// The visible set with bookmark flags and last grades.
pub fn study_rows(state: &AppState) -> Vec<StudyRow> {
    state
        .current_view()
        .iter()
        .map(|pair| StudyRow {
            pair: pair.clone(),
            bookmarked: state.bookmarks.contains(pair),
            status: state.ledger.restore(pair).1,
        })
        .collect()
}

/// Grade a whole practice form.
///
/// `answers` lines up with the target's pairs; missing entries count as
/// empty. Answers are stored as typed. Blank answers only touch the stored
/// answer text.
pub fn submit_practice(
    state: &mut AppState,
    target: PracticeTarget,
    answers: &[String],
) -> CommandResult<PracticeReport> {
    let pairs = target_pairs(state, target);
    let mut outcomes = Vec::with_capacity(pairs.len());

    for (index, pair) in pairs.into_iter().enumerate() {
        let answer = answers.get(index).map(String::as_str).unwrap_or_default();
        let status = if answer.trim().is_empty() {
            state.ledger.record_partial(&pair.source, answer);
            AnswerStatus::Unanswered
        } else {
            let status = check_answer(answer, &pair.target);
            state
                .ledger
                .record_submission(&pair.source, answer, status == AnswerStatus::Correct);
            status
        };
        outcomes.push(PracticeOutcome {
            pair,
            answer: answer.to_string(),
            status,
        });
    }
    state.repository.save_progress(state.ledger.records())?;

    let correct = outcomes
        .iter()
        .filter(|o| o.status == AnswerStatus::Correct)
        .count();
    let total = outcomes.len();
    tracing::info!(?target, correct, total, "practice submitted");
    state.notify(Change::Progress);

    Ok(PracticeReport {
        outcomes,
        correct,
        total,
    })
}

/// Keep a typed answer without grading it.
pub fn save_partial(state: &mut AppState, source: &str, answer: &str) -> CommandResult<()> {
    state.ledger.record_partial(source, answer);
    state.repository.save_progress(state.ledger.records())?;
    state.notify(Change::Progress);
    Ok(())
}

/// Stored answers for the target's pairs, graded again.
pub fn restore_practice(state: &AppState, target: PracticeTarget) -> Vec<PracticeOutcome> {
    target_pairs(state, target)
        .into_iter()
        .map(|pair| {
            let (answer, status) = state.ledger.restore(&pair);
            PracticeOutcome {
                pair,
                answer,
                status,
            }
        })
        .collect()
}

pub fn score(state: &AppState, target: PracticeTarget) -> SetScore {
    let pairs = target_pairs(state, target);
    SetScore {
        correct: state.ledger.score(&pairs),
        total: pairs.len(),
    }
}

/// Global progress against the configured corpus.
pub fn progress_summary(state: &AppState) -> ProgressSummary {
    state.ledger.summary(state.corpus_size())
}
