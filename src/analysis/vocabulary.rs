use crate::analysis::token::fold_case;
use std::collections::HashSet;

/// Case-folded reference word list with constant-time lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularySet {
    words: HashSet<String>,
}

impl VocabularySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw entries. Entries are trimmed and case-folded;
    /// entries that are empty after trimming are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word.as_ref());
        }
        set
    }

    /// Returns false when the entry was empty or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(fold_case(word))
    }

    /// Membership test on the case-folded form of `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.contains_folded(&fold_case(word))
    }

    /// Membership test for a word the caller has already case-folded.
    pub fn contains_folded(&self, folded: &str) -> bool {
        self.words.contains(folded)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for VocabularySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_case_insensitive() {
        let set = VocabularySet::from_words(["Hello", "WORLD"]);
        assert!(set.contains("hello"));
        assert!(set.contains("HeLLo"));
        assert!(set.contains("world"));
        assert!(!set.contains("other"));
    }

    #[test]
    fn test_contains_folded_expects_lowercase() {
        let set = VocabularySet::from_words(["Word"]);
        assert!(set.contains_folded("word"));
        assert!(!set.contains_folded("Word"));
    }

    #[test]
    fn test_from_words_trims_and_drops_empty() {
        let set = VocabularySet::from_words(["  cat ", "", "   ", "dog\r"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("cat"));
        assert!(set.contains("dog"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: VocabularySet = ["the", "The", "THE"].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = VocabularySet::new();
        assert!(set.insert("can't"));
        assert!(!set.insert("CAN'T"));
        assert!(!set.insert(" "));
        assert!(set.contains("can't"));
    }

    #[test]
    fn test_empty_set() {
        let set = VocabularySet::new();
        assert!(set.is_empty());
        assert!(!set.contains(""));
    }
}
