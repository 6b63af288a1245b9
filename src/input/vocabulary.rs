use super::text::read_to_string;
use crate::analysis::VocabularySet;
use crate::engine::config::{ListDelimiter, VocabularyConfig};
use std::path::Path;
use tracing::{info, warn};

/// Builds a vocabulary from list text: entries split by `delimiter`, then
/// trimmed and case-folded, blanks dropped.
pub fn parse_vocabulary(text: &str, delimiter: ListDelimiter) -> VocabularySet {
    delimiter.split(text).collect()
}

/// Reads a vocabulary list from disk.
///
/// Never fails: a missing or unreadable file is logged and yields an empty
/// set, so analysis proceeds with zero coverage for that list.
pub fn load_vocabulary(path: &Path, delimiter: ListDelimiter) -> VocabularySet {
    match read_to_string(path) {
        Ok(text) => {
            let set = parse_vocabulary(&text, delimiter);
            info!(path = %path.display(), words = set.len(), "vocabulary loaded");
            set
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not load vocabulary, using empty list");
            VocabularySet::new()
        }
    }
}

/// The known list and the optional NGL list, fully materialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabularies {
    pub known: VocabularySet,
    pub ngl: Option<VocabularySet>,
}

impl Vocabularies {
    pub fn load(config: &VocabularyConfig) -> Self {
        Self {
            known: load_vocabulary(&config.known_path, config.delimiter),
            ngl: config
                .ngl_path
                .as_deref()
                .map(|path| load_vocabulary(path, config.delimiter)),
        }
    }

    pub fn ngl(&self) -> Option<&VocabularySet> {
        self.ngl.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn list_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_lines_trims_and_folds() {
        let set = parse_vocabulary("  The\r\ncat \n\n  \nSAT\n", ListDelimiter::Lines);
        assert_eq!(set.len(), 3);
        assert!(set.contains_folded("the"));
        assert!(set.contains_folded("cat"));
        assert!(set.contains_folded("sat"));
    }

    #[test]
    fn test_parse_lines_keeps_multi_word_entries() {
        let set = parse_vocabulary("ice cream\n", ListDelimiter::Lines);
        assert!(set.contains_folded("ice cream"));
        assert!(!set.contains_folded("ice"));
    }

    #[test]
    fn test_parse_whitespace_splits_everything() {
        let set = parse_vocabulary("ice cream\tcone\n", ListDelimiter::Whitespace);
        assert_eq!(set.len(), 3);
        assert!(set.contains_folded("cone"));
    }

    #[test]
    fn test_load_missing_file_gives_empty_set() {
        let set = load_vocabulary(Path::new("/nonexistent/known.txt"), ListDelimiter::Lines);
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let file = list_file("Foo\nbar\n");
        let set = load_vocabulary(file.path(), ListDelimiter::Lines);
        assert!(set.contains("FOO"));
        assert!(set.contains("bar"));
    }

    #[test]
    fn test_vocabularies_without_ngl() {
        let known = list_file("foo\n");
        let config = VocabularyConfig {
            known_path: known.path().to_path_buf(),
            ngl_path: None,
            delimiter: ListDelimiter::Lines,
        };
        let vocab = Vocabularies::load(&config);
        assert_eq!(vocab.known.len(), 1);
        assert!(vocab.ngl().is_none());
    }

    #[test]
    fn test_vocabularies_missing_ngl_is_empty_not_absent() {
        let known = list_file("foo\n");
        let config = VocabularyConfig {
            known_path: known.path().to_path_buf(),
            ngl_path: Some(PathBuf::from("/nonexistent/ngl.txt")),
            delimiter: ListDelimiter::Lines,
        };
        let vocab = Vocabularies::load(&config);
        assert_eq!(vocab.ngl().map(VocabularySet::len), Some(0));
    }
}
