//! Substring search over word pairs.

use crate::normalize::normalize;
use crate::types::WordPair;
use serde::Serialize;
use std::collections::HashSet;

/// Bonus added when the query is a prefix of the term.
const PREFIX_BONUS: f64 = 20.0;

/// A pair matching a search query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub pair: WordPair,
    /// 0 to 100.
    pub score: f64,
}

/// Search `pairs` on both sides, best matches first.
///
/// Duplicate pairs (case-insensitive) are reported once.
pub fn search<'a, I>(query: &str, pairs: I) -> Vec<SearchHit>
where
    I: IntoIterator<Item = &'a WordPair>,
{
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut hits: Vec<SearchHit> = pairs
        .into_iter()
        .filter_map(|pair| {
            let score = match_score(&normalize(&pair.target), &query)
                .max(match_score(&normalize(&pair.source), &query));
            (score > 0.0).then(|| SearchHit {
                pair: pair.clone(),
                score,
            })
        })
        .filter(|hit| {
            seen.insert(format!(
                "{}|{}",
                hit.pair.target.to_lowercase(),
                hit.pair.source.to_lowercase()
            ))
        })
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}

/// Share of `term` covered by `query`, plus a prefix bonus, capped at 100.
pub fn match_score(term: &str, query: &str) -> f64 {
    if term.is_empty() || query.is_empty() {
        return 0.0;
    }
    let Some(index) = term.find(query) else {
        return 0.0;
    };

    let mut score = (query.chars().count() * 100) as f64 / term.chars().count() as f64;
    if index == 0 {
        score += PREFIX_BONUS;
    }
    score.min(100.0)
}
