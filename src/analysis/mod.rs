//! Text analysis core: tokenization, vocabulary classification, coverage
//! metrics and annotated reconstruction of the input.
//!
//! Everything here is pure and synchronous. Vocabularies and results are
//! passed in and returned by value; no state survives between calls.

pub mod analyzer;
pub mod annotate;
pub mod classify;
pub mod markup;
pub mod percentage;
pub mod report;
pub mod token;
pub mod tokenizer;
pub mod vocabulary;

pub use analyzer::{analyze, analyze_text, AnalysisResult};
pub use annotate::{annotate, AnnotatedToken};
pub use classify::{classify, WordClassification};
pub use markup::escape_markup;
pub use percentage::Percentage;
pub use token::Token;
pub use tokenizer::tokenize;
pub use vocabulary::VocabularySet;
