use proptest::prelude::*;
use vocabmeter::analysis::token::reconstruct;
use vocabmeter::analysis::{
    analyze, analyze_text, tokenize, Percentage, VocabularySet, WordClassification,
};

fn vocabulary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..12)
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-zA-Z']{1,6}", "[ .,;!?\n0-9]{1,3}"), 0..20)
        .prop_map(|parts| parts.into_iter().map(|(w, sep)| w + &sep).collect())
}

// ── Tokenizer: lossless round-trip and partition ──────────────────────────

proptest! {
    #[test]
    fn tokens_concatenate_to_input(text in any::<String>()) {
        let tokens = tokenize(&text);
        prop_assert_eq!(reconstruct(&tokens), text);
    }

    #[test]
    fn tokens_are_never_empty(text in any::<String>()) {
        prop_assert!(tokenize(&text).iter().all(|t| !t.text.is_empty()));
    }

    #[test]
    fn token_byte_lengths_partition_input(text in "\\PC{0,60}") {
        let tokens = tokenize(&text);
        let covered: usize = tokens.iter().map(|t| t.text.len()).sum();
        prop_assert_eq!(covered, text.len());
        prop_assert!(tokens.windows(2).all(|pair| pair[0].is_word || pair[1].is_word));
    }

    #[test]
    fn word_tokens_contain_only_letters_and_apostrophes(text in "\\PC{0,60}") {
        for token in tokenize(&text).iter().filter(|t| t.is_word) {
            prop_assert!(token.text.chars().all(|c| c.is_alphabetic() || c == '\''));
        }
    }
}

// ── Classifier: casing, precedence, zero division, idempotence ────────────

proptest! {
    #[test]
    fn casing_does_not_change_classification(
        text in sentence(),
        known in vocabulary(),
        ngl in vocabulary(),
    ) {
        let known = VocabularySet::from_words(&known);
        let ngl = VocabularySet::from_words(&ngl);
        let lower = analyze_text(&text.to_lowercase(), &known, Some(&ngl));
        let upper = analyze_text(&text.to_uppercase(), &known, Some(&ngl));

        prop_assert_eq!(lower.total_words, upper.total_words);
        prop_assert_eq!(lower.known_occurrences, upper.known_occurrences);
        prop_assert_eq!(lower.ngl_occurrences, upper.ngl_occurrences);
        prop_assert_eq!(lower.coverage_vocab_known, upper.coverage_vocab_known);
        prop_assert_eq!(lower.unknown_words, upper.unknown_words);
    }

    #[test]
    fn words_in_both_lists_are_known(text in sentence(), shared in vocabulary()) {
        let known = VocabularySet::from_words(&shared);
        let ngl = VocabularySet::from_words(&shared);
        let result = analyze_text(&text, &known, Some(&ngl));

        prop_assert_eq!(result.ngl_occurrences, 0);
        prop_assert!(result
            .annotations
            .iter()
            .all(|t| t.tag != Some(WordClassification::Ngl)));
    }

    #[test]
    fn wordless_text_has_zero_coverage(text in "[ 0-9.,;:!?_()\\-\n]{0,40}") {
        let known = VocabularySet::from_words(["a"]);
        let result = analyze_text(&text, &known, Some(&known));

        prop_assert_eq!(result.total_words, 0);
        for pct in [
            result.coverage_total_known,
            result.coverage_vocab_known,
            result.coverage_total_ngl,
            result.coverage_vocab_ngl,
        ] {
            prop_assert_eq!(pct, Percentage::ZERO);
            prop_assert_eq!(pct.to_string(), "0.00");
        }
    }

    #[test]
    fn analysis_is_idempotent(text in sentence(), known in vocabulary(), ngl in vocabulary()) {
        let tokens = tokenize(&text);
        let known = VocabularySet::from_words(&known);
        let ngl = VocabularySet::from_words(&ngl);
        prop_assert_eq!(
            analyze(&tokens, &known, Some(&ngl)),
            analyze(&tokens, &known, Some(&ngl))
        );
    }

    #[test]
    fn counts_are_consistent(text in sentence(), known in vocabulary(), ngl in vocabulary()) {
        let known = VocabularySet::from_words(&known);
        let ngl = VocabularySet::from_words(&ngl);
        let result = analyze_text(&text, &known, Some(&ngl));

        prop_assert!(result.known_occurrences + result.ngl_occurrences <= result.total_words);
        prop_assert!(result.distinct_words <= result.total_words);
        prop_assert_eq!(
            result.known_distinct + result.ngl_distinct + result.unknown_words.len(),
            result.distinct_words
        );
        prop_assert!(result.coverage_total_known.hundredths() <= 10_000);
    }

    #[test]
    fn word_lists_are_disjoint(text in sentence(), known in vocabulary(), ngl in vocabulary()) {
        let known = VocabularySet::from_words(&known);
        let ngl = VocabularySet::from_words(&ngl);
        let result = analyze_text(&text, &known, Some(&ngl));

        for word in &result.unknown_words {
            prop_assert!(!known.contains_folded(word));
            prop_assert!(!ngl.contains_folded(word));
            prop_assert!(!result.ngl_words.contains(word));
        }
        for word in &result.ngl_words {
            prop_assert!(!known.contains_folded(word));
            prop_assert!(ngl.contains_folded(word));
        }
    }
}
