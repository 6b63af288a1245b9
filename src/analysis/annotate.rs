use crate::analysis::classify::{classify, WordClassification};
use crate::analysis::markup::escape_markup;
use crate::analysis::{Token, VocabularySet};
use std::borrow::Cow;

/// A token of the original text together with its classification.
///
/// Non-word tokens carry no tag. `text` keeps the original casing and
/// spacing; use [`AnnotatedToken::escaped`] when embedding it in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    pub text: String,
    pub tag: Option<WordClassification>,
}

impl AnnotatedToken {
    pub fn escaped(&self) -> Cow<'_, str> {
        escape_markup(&self.text)
    }
}

/// Tags every word token by the known/NGL precedence rule and passes
/// non-word tokens through untagged, preserving order.
pub fn annotate(
    tokens: &[Token],
    known: &VocabularySet,
    ngl: Option<&VocabularySet>,
) -> Vec<AnnotatedToken> {
    tokens
        .iter()
        .map(|token| AnnotatedToken {
            text: token.text.clone(),
            tag: token
                .is_word
                .then(|| classify(&token.folded(), known, ngl)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenize;

    #[test]
    fn test_annotate_keeps_original_casing() {
        let known = VocabularySet::from_words(["the"]);
        let annotated = annotate(&tokenize("THE end"), &known, None);
        assert_eq!(annotated[0].text, "THE");
        assert_eq!(annotated[0].tag, Some(WordClassification::Known));
        assert_eq!(annotated[1].tag, None);
        assert_eq!(annotated[2].tag, Some(WordClassification::Unknown));
    }

    #[test]
    fn test_annotate_applies_precedence() {
        let known = VocabularySet::from_words(["foo"]);
        let ngl = VocabularySet::from_words(["foo", "bar"]);
        let tags: Vec<_> = annotate(&tokenize("foo bar baz"), &known, Some(&ngl))
            .into_iter()
            .filter_map(|t| t.tag)
            .collect();
        assert_eq!(
            tags,
            vec![
                WordClassification::Known,
                WordClassification::Ngl,
                WordClassification::Unknown
            ]
        );
    }

    #[test]
    fn test_escaped_non_word() {
        let annotated = annotate(&tokenize("a < b"), &VocabularySet::new(), None);
        assert_eq!(annotated[1].escaped(), " &lt; ");
        assert_eq!(annotated[1].tag, None);
    }
}
