/// A slice of the input text, tagged as word or non-word.
///
/// Concatenating the `text` of every token produced for an input, in order,
/// yields that input byte for byte.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    /// True when `text` matched the word pattern; false for whitespace,
    /// punctuation, digits and symbols.
    pub is_word: bool,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: true,
        }
    }

    pub fn non_word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: false,
        }
    }

    /// Case-folded form used for every vocabulary lookup.
    pub fn folded(&self) -> String {
        fold_case(&self.text)
    }
}

pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Rebuilds the original text from a token sequence.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
