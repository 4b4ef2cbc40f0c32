//! Test fixtures and factory functions for creating test data.

use vocab_core::types::WordPair;

/// Comma-separated upload with `rows` numbered pairs and a header row.
pub fn corpus_csv(rows: usize) -> String {
    let mut content = String::from("Dutch,English\n");
    for i in 0..rows {
        content.push_str(&format!("woord {i},word {i}\n"));
    }
    content
}

/// `n` numbered word pairs.
pub fn pairs(n: usize) -> Vec<WordPair> {
    (0..n)
        .map(|i| WordPair::new(format!("word {i}"), format!("woord {i}")))
        .collect()
}

/// Spoken texts for one pair, in playback order.
pub fn spoken_pair(pair: &WordPair) -> [String; 3] {
    [pair.source.clone(), "means".to_string(), pair.target.clone()]
}

/// An export document without its `bookmarks` field.
pub fn bundle_without_bookmarks() -> &'static str {
    r#"{
  "version": 1,
  "progress": { "word 1": { "answer": "woord 1", "isCorrect": true, "timestamp": 1 } },
  "exportedAt": "2024-01-01T00:00:00Z"
}"#
}
