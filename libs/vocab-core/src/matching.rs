//! Answer checking for typed practice.
//!
//! An accepted field lists every valid answer separated by `/` or `|`
//! (`"kat/poes"`). Both the submission path and the restore path grade with
//! [`check_answer`], so a stored answer always re-grades the way it was
//! graded when submitted.

use crate::normalize::normalize;
use crate::types::AnswerStatus;

/// Characters separating accepted variants.
pub const VARIANT_DELIMITERS: [char; 2] = ['/', '|'];

/// Raw variants of an accepted field, trimmed, empty entries removed.
pub fn variants(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(VARIANT_DELIMITERS)
        .map(str::trim)
        .filter(|variant| !variant.is_empty())
}

/// Normalized variants of an accepted field.
pub fn accepted_variants(field: &str) -> Vec<String> {
    field
        .split(VARIANT_DELIMITERS)
        .map(normalize)
        .filter(|variant| !variant.is_empty())
        .collect()
}

/// Whether `input` equals one of the variants after normalization.
///
/// Empty input is never accepted.
pub fn is_accepted(input: &str, field: &str) -> bool {
    let typed = normalize(input);
    !typed.is_empty() && accepted_variants(field).contains(&typed)
}

/// Grade an answer; blank input is `Unanswered` rather than wrong.
pub fn check_answer(input: &str, field: &str) -> AnswerStatus {
    if normalize(input).is_empty() {
        AnswerStatus::Unanswered
    } else if is_accepted(input, field) {
        AnswerStatus::Correct
    } else {
        AnswerStatus::Incorrect
    }
}
