use crate::analysis::Token;
use lazy_static::lazy_static;
use regex::Regex;
use std::iter;
use std::ops::Range;

lazy_static! {
    /// Maximal runs of Unicode letters and ASCII apostrophes.
    static ref LETTER_RUN: Regex =
        Regex::new(r"[\p{L}']+").expect("letter run is a valid regex");

    /// Characters on the word side of a boundary: letters, digits and connector
    /// punctuation. Combining marks and zero-width joiners stay on the non-word side.
    static ref WORD_CHAR: Regex = Regex::new(r"^[\w&&[^\p{M}\x{200C}\x{200D}]]$")
        .expect("word character class is a valid regex");
}

fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

fn is_boundary(text: &str, at: usize) -> bool {
    let before = text[..at].chars().next_back().is_some_and(is_word_char);
    let after = text[at..].chars().next().is_some_and(is_word_char);
    before != after
}

/// Pushes the words found inside one letter run: leftmost start on a boundary,
/// then the longest extension that also ends on a boundary.
fn bounded_words(text: &str, run: Range<usize>, found: &mut Vec<Range<usize>>) {
    let offsets: Vec<usize> = text[run.clone()]
        .char_indices()
        .map(|(i, _)| run.start + i)
        .chain(iter::once(run.end))
        .collect();

    let mut i = 0;
    while i + 1 < offsets.len() {
        if is_boundary(text, offsets[i]) {
            if let Some(j) = (i + 1..offsets.len())
                .rev()
                .find(|&j| is_boundary(text, offsets[j]))
            {
                found.push(offsets[i]..offsets[j]);
                i = j;
                continue;
            }
        }
        i += 1;
    }
}

/// Splits text into alternating word and non-word tokens.
///
/// Words are the leftmost, longest runs of `[\p{L}']+` that start and end on
/// a word boundary. Everything between words becomes a non-word token, so
/// the output always concatenates back to `text`. Empty input gives no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut spans = Vec::new();
    for run in LETTER_RUN.find_iter(text) {
        bounded_words(text, run.range(), &mut spans);
    }

    let mut tokens = Vec::new();
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            tokens.push(Token::non_word(&text[cursor..span.start]));
        }
        tokens.push(Token::word(&text[span.clone()]));
        cursor = span.end;
    }

    if cursor < text.len() {
        tokens.push(Token::non_word(&text[cursor..]));
    }

    tokens
}

/// Word tokens only, in order, with original casing.
pub fn words(tokens: &[Token]) -> impl Iterator<Item = &str> {
    tokens.iter().filter(|t| t.is_word).map(|t| t.text.as_str())
}
