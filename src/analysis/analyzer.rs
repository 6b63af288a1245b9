use crate::analysis::annotate::{annotate, AnnotatedToken};
use crate::analysis::classify::{classify, WordClassification};
use crate::analysis::{Percentage, Token, VocabularySet};
use std::collections::HashSet;
use tracing::debug;

/// Coverage statistics and annotations for one analyzed text.
///
/// Every field is derived from the inputs of a single [`analyze`] call;
/// nothing is carried over between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub total_words: usize,
    pub distinct_words: usize,
    pub known_occurrences: usize,
    pub known_distinct: usize,
    pub ngl_occurrences: usize,
    pub ngl_distinct: usize,
    pub coverage_total_known: Percentage,
    pub coverage_vocab_known: Percentage,
    pub coverage_total_ngl: Percentage,
    pub coverage_vocab_ngl: Percentage,
    /// Distinct words in neither list, in order of first appearance.
    pub unknown_words: Vec<String>,
    /// Distinct NGL words that are not known, in order of first appearance.
    pub ngl_words: Vec<String>,
    /// Whether an NGL list took part in the analysis.
    pub has_ngl: bool,
    pub annotations: Vec<AnnotatedToken>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// True when there is nothing to list: every distinct word is known.
    pub fn all_words_known(&self) -> bool {
        self.unknown_words.is_empty() && self.ngl_words.is_empty()
    }
}

/// Classifies every word of `tokens` against `known` and the optional `ngl`
/// list and computes coverage.
///
/// Words are compared case-insensitively. A word in both lists counts as
/// known only.
pub fn analyze(
    tokens: &[Token],
    known: &VocabularySet,
    ngl: Option<&VocabularySet>,
) -> AnalysisResult {
    let mut total_words = 0;
    let mut known_occurrences = 0;
    let mut ngl_occurrences = 0;

    let mut seen = HashSet::new();
    let mut known_distinct = 0;
    let mut unknown_words = Vec::new();
    let mut ngl_words = Vec::new();

    for token in tokens.iter().filter(|t| t.is_word) {
        let folded = token.folded();
        let class = classify(&folded, known, ngl);
        total_words += 1;

        match class {
            WordClassification::Known => known_occurrences += 1,
            WordClassification::Ngl => ngl_occurrences += 1,
            WordClassification::Unknown => {}
        }

        if !seen.insert(folded.clone()) {
            continue;
        }
        match class {
            WordClassification::Known => known_distinct += 1,
            WordClassification::Ngl => ngl_words.push(folded),
            WordClassification::Unknown => unknown_words.push(folded),
        }
    }

    let distinct_words = seen.len();
    let ngl_distinct = ngl_words.len();

    debug!(
        total_words,
        distinct_words, known_occurrences, ngl_occurrences, "analyzed text"
    );

    AnalysisResult {
        total_words,
        distinct_words,
        known_occurrences,
        known_distinct,
        ngl_occurrences,
        ngl_distinct,
        coverage_total_known: Percentage::of(known_occurrences, total_words),
        coverage_vocab_known: Percentage::of(known_distinct, distinct_words),
        coverage_total_ngl: Percentage::of(ngl_occurrences, total_words),
        coverage_vocab_ngl: Percentage::of(ngl_distinct, distinct_words),
        unknown_words,
        ngl_words,
        has_ngl: ngl.is_some(),
        annotations: annotate(tokens, known, ngl),
    }
}

/// Tokenizes and analyzes `text` in one step.
pub fn analyze_text(
    text: &str,
    known: &VocabularySet,
    ngl: Option<&VocabularySet>,
) -> AnalysisResult {
    analyze(&crate::analysis::tokenize(text), known, ngl)
}
