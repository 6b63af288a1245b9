//! Vocabulary coverage analysis.
//!
//! Measures how much of a text is covered by a list of known words and an
//! optional NGL list of words to learn next, and marks every word of the
//! text with its classification.
//!
//! ```
//! use vocabmeter::analysis::{analyze_text, VocabularySet};
//!
//! let known = VocabularySet::from_words(["the", "cat"]);
//! let result = analyze_text("The cat sat.", &known, None);
//! assert_eq!(result.coverage_total_known.to_string(), "66.67");
//! assert_eq!(result.unknown_words, vec!["sat"]);
//! ```

pub mod analysis;
pub mod app;
pub mod engine;
pub mod input;
pub mod ui;
