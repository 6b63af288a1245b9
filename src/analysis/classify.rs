use crate::analysis::VocabularySet;
use std::fmt;

/// Per-occurrence tag for a word token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClassification {
    Known,
    Ngl,
    Unknown,
}

impl WordClassification {
    /// CSS class used when the word is embedded in markup.
    pub fn css_class(self) -> &'static str {
        match self {
            WordClassification::Known => "known",
            WordClassification::Ngl => "ngl",
            WordClassification::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WordClassification::Known => "Known word",
            WordClassification::Ngl => "NGL word (not known)",
            WordClassification::Unknown => "Unknown word",
        }
    }
}

impl fmt::Display for WordClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Known wins over NGL; NGL applies only to words outside the known list.
pub fn classify(
    folded: &str,
    known: &VocabularySet,
    ngl: Option<&VocabularySet>,
) -> WordClassification {
    if known.contains_folded(folded) {
        WordClassification::Known
    } else if ngl.is_some_and(|ngl| ngl.contains_folded(folded)) {
        WordClassification::Ngl
    } else {
        WordClassification::Unknown
    }
}
