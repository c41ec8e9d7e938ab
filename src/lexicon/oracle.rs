//! Word membership and the two-phase lexicon capability.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Uppercase word set with case-insensitive lookup.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build from any words. Each is trimmed and uppercased; blanks are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a newline-delimited word list.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Advisory classification of a candidate word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Valid,
    Invalid,
    /// No lexicon installed yet, or it failed to load.
    Unknown,
}

/// The lexicon capability as seen by the engine.
///
/// Starts `Unavailable` and is swapped to `Ready` once a word list arrives.
/// Cloning is cheap; the list is shared.
#[derive(Clone, Debug, Default)]
pub enum Lexicon {
    #[default]
    Unavailable,
    Ready(Arc<WordList>),
}

impl Lexicon {
    /// Wrap a loaded word list.
    #[must_use]
    pub fn ready(words: WordList) -> Self {
        Lexicon::Ready(Arc::new(words))
    }

    /// Whether lookups give real answers.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Lexicon::Ready(_))
    }

    /// Classify a word. `Unknown` while unavailable.
    #[must_use]
    pub fn validity(&self, word: &str) -> Validity {
        match self {
            Lexicon::Unavailable => Validity::Unknown,
            Lexicon::Ready(list) if list.contains(word) => Validity::Valid,
            Lexicon::Ready(_) => Validity::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_uppercases() {
        let list = WordList::parse("cat\n  Dog \r\n\n\nqi\n");
        assert_eq!(list.len(), 3);
        assert!(list.contains("CAT"));
        assert!(list.contains("dog"));
        assert!(list.contains("Qi"));
        assert!(!list.contains(""));
    }

    #[test]
    fn test_duplicates_collapse() {
        let list = WordList::from_words(["za", "ZA", " Za"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_unavailable_is_unknown() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.is_ready());
        assert_eq!(lexicon.validity("CAT"), Validity::Unknown);
    }

    #[test]
    fn test_ready_classifies() {
        let lexicon = Lexicon::ready(WordList::from_words(["cat"]));
        assert!(lexicon.is_ready());
        assert_eq!(lexicon.validity("CAT"), Validity::Valid);
        assert_eq!(lexicon.validity("cat"), Validity::Valid);
        assert_eq!(lexicon.validity("TAC"), Validity::Invalid);
    }
}
