use crate::analysis::{tokenize, Token};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

}

/// Tokenized text plus a description of where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub tokens: Vec<Token>,
    pub source: String,
}

impl LoadedDocument {
    /// Tokenizes `text`. Blank text is a valid document with no words.
    pub fn from_text(text: &str, source: impl Into<String>) -> Self {
        let source = source.into();
        let tokens = tokenize(text);
        info!(source = %source, tokens = tokens.len(), "document loaded");
        Self { tokens, source }
    }
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;
pub mod vocabulary;

/// Loads a document, choosing the reader by file extension.
///
/// `.pdf` and `.epub` use their dedicated readers; any other extension is
/// read as UTF-8 text.
pub fn load_document(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => text::load(path),
    }
}
