//! Canonical form of free-text answers.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, decompose and strip combining marks, then trim.
///
/// Trimming happens last so a leading combining mark cannot expose
/// whitespace on a second pass; `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let stripped: String = s
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.trim().to_string()
}

/// Normalize an optional value, mapping `None` to the empty string.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}
