//! Built-in word list and context sets.

use crate::types::WordPair;
use std::cmp::Ordering;

/// (source, target) pairs loaded before any upload.
const DEFAULT_WORDS: &[(&str, &str)] = &[
    ("cat", "kat/poes"),
    ("dog", "hond"),
    ("house", "huis/woning"),
    ("tree", "boom"),
    ("water", "water"),
    ("bread", "brood"),
    ("cheese", "kaas"),
    ("milk", "melk"),
    ("apple", "appel"),
    ("bicycle", "fiets"),
    ("street", "straat"),
    ("city", "stad"),
    ("book", "boek"),
    ("table", "tafel"),
    ("chair", "stoel"),
    ("window", "raam"),
    ("door", "deur"),
    ("friend", "vriend/vriendin"),
    ("work", "werk"),
    ("money", "geld"),
    ("time", "tijd"),
    ("day", "dag"),
    ("night", "nacht"),
    ("week", "week"),
    ("year", "jaar"),
    ("to go", "gaan"),
    ("to walk", "lopen/wandelen"),
    ("to eat", "eten"),
    ("to drink", "drinken"),
    ("to sleep", "slapen"),
    ("to read", "lezen"),
    ("to write", "schrijven"),
    ("to speak", "spreken/praten"),
    ("beautiful", "mooi"),
    ("big", "groot"),
    ("small", "klein"),
    ("cheap", "goedkoop"),
    ("expensive", "duur"),
    ("idea", "idee"),
    ("café", "café"),
];

/// (context, source, target) phrases grouped by situation.
const CONTEXT_PHRASES: &[(&str, &str, &str)] = &[
    ("Lesson 1", "good morning", "goedemorgen"),
    ("Lesson 1", "thank you", "dank je/dank u"),
    ("Lesson 1", "goodbye", "tot ziens/doei"),
    ("Lesson 2", "how are you?", "hoe gaat het?"),
    ("Lesson 2", "I am fine", "het gaat goed"),
    ("Lesson 2", "and you?", "en met jou?/en met u?"),
    ("Lesson 10", "where is the station?", "waar is het station?"),
    ("Lesson 10", "a ticket to Utrecht", "een kaartje naar Utrecht"),
    ("Lesson 10", "the train is late", "de trein is te laat"),
    ("At the market", "how much does it cost?", "hoeveel kost het?"),
    ("At the market", "a kilo of apples", "een kilo appels"),
    ("At the market", "that is all", "dat is alles"),
];

/// The word list shown before the first upload.
pub fn default_words() -> Vec<WordPair> {
    DEFAULT_WORDS
        .iter()
        .map(|(source, target)| WordPair::new(*source, *target))
        .collect()
}

/// Word pairs grouped under context names.
#[derive(Debug, Clone)]
pub struct ContextCatalog {
    entries: Vec<(String, WordPair)>,
}

impl Default for ContextCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContextCatalog {
    /// The catalogue shipped with the application.
    pub fn builtin() -> Self {
        Self::new(
            CONTEXT_PHRASES
                .iter()
                .map(|(context, source, target)| (context.to_string(), WordPair::new(*source, *target))),
        )
    }

    pub fn new(entries: impl IntoIterator<Item = (String, WordPair)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Distinct context names in natural order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (context, _) in &self.entries {
            if !names.contains(context) {
                names.push(context.clone());
            }
        }
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    /// Pairs filed under `context`, in catalogue order.
    pub fn pairs(&self, context: &str) -> Vec<WordPair> {
        self.entries
            .iter()
            .filter(|(name, _)| name == context)
            .map(|(_, pair)| pair.clone())
            .collect()
    }

    pub fn contains(&self, context: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == context)
    }

    /// Every pair across all contexts.
    pub fn all_pairs(&self) -> impl Iterator<Item = &WordPair> {
        self.entries.iter().map(|(_, pair)| pair)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compare names so that embedded numbers sort numerically ("Lesson 2" < "Lesson 10").
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_runs = runs(a);
    let b_runs = runs(b);

    for (x, y) in a_runs.iter().zip(&b_runs) {
        if x == y {
            continue;
        }
        let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            _ => x.cmp(y),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a_runs.len().cmp(&b_runs.len())
}

/// Split into alternating digit and non-digit runs.
fn runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut digits: Option<bool> = None;

    for (index, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        if digits.is_some_and(|d| d != is_digit) {
            runs.push(&s[start..index]);
            start = index;
        }
        digits = Some(is_digit);
    }
    if start < s.len() {
        runs.push(&s[start..]);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_words_are_complete() {
        let words = default_words();
        assert!(!words.is_empty());
        assert!(words.iter().all(|p| !p.source.is_empty() && !p.target.is_empty()));
    }

    #[test]
    fn test_natural_order() {
        let catalog = ContextCatalog::builtin();
        assert_eq!(
            catalog.names(),
            vec!["At the market", "Lesson 1", "Lesson 2", "Lesson 10"]
        );
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("Lesson 2", "Lesson 10"), Ordering::Less);
        assert_eq!(natural_cmp("a10b", "a10c"), Ordering::Less);
        assert_eq!(natural_cmp("Lesson", "Lesson 1"), Ordering::Less);
        assert_eq!(natural_cmp("x", "x"), Ordering::Equal);
    }

    #[test]
    fn test_pairs_by_context() {
        let catalog = ContextCatalog::builtin();
        let pairs = catalog.pairs("Lesson 2");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].source, "how are you?");
        assert!(catalog.pairs("Lesson 99").is_empty());
        assert_eq!(catalog.all_pairs().count(), catalog.len());
    }
}
