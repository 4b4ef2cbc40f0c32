//! Corpus upload parser.
//!
//! # Format
//! A two-column table: column A holds the target-language term, column B the
//! source-language term. Delimited text is accepted with tab, semicolon or
//! comma separators and double-quoted fields:
//! ```text
//! Dutch,English
//! kat/poes,cat
//! "huis, woning",house
//! ```
//! A first row naming the columns is detected and skipped. Rows missing
//! either term are dropped.

use crate::error::{Result, UploadError};
use crate::types::WordPair;

/// Substrings that mark a first cell as a column name.
pub const TARGET_HEADER_HINTS: &[&str] = &["dutch", "target"];
/// Substrings that mark a second cell as a column name.
pub const SOURCE_HEADER_HINTS: &[&str] = &["english", "source"];

/// Parse delimited text into word pairs.
pub fn parse(content: &str) -> Result<Vec<WordPair>> {
    let content = content.trim_start_matches('\u{feff}');
    if content.trim().is_empty() {
        return Err(UploadError::EmptyFile);
    }

    let delimiter = detect_delimiter(content);
    let rows: Vec<Vec<String>> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_row(line, delimiter))
        .collect();

    parse_rows(&rows)
}

/// Turn already-split rows into word pairs.
pub fn parse_rows<R: AsRef<[String]>>(rows: &[R]) -> Result<Vec<WordPair>> {
    let skip = usize::from(rows.first().is_some_and(|row| is_header(row.as_ref())));

    let pairs: Vec<WordPair> = rows
        .iter()
        .skip(skip)
        .filter_map(|row| {
            let row = row.as_ref();
            let target = cell(row, 0)?;
            let source = cell(row, 1)?;
            Some(WordPair::new(source, target))
        })
        .collect();

    if pairs.is_empty() {
        return Err(UploadError::NoValidPairs);
    }
    Ok(pairs)
}

fn cell(row: &[String], index: usize) -> Option<&str> {
    row.get(index)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn is_header(row: &[String]) -> bool {
    let matches = |index: usize, hints: &[&str]| {
        row.get(index).is_some_and(|value| {
            let value = value.to_lowercase();
            hints.iter().any(|hint| value.contains(hint))
        })
    };
    matches(0, TARGET_HEADER_HINTS) || matches(1, SOURCE_HEADER_HINTS)
}

fn detect_delimiter(content: &str) -> char {
    let first = content.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    if first.contains('\t') {
        '\t'
    } else if first.contains(';') && !first.contains(',') {
        ';'
    } else {
        ','
    }
}

fn split_row(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            c if c == delimiter && !in_quotes => cells.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    cells.push(current);
    cells
}
