use super::{LoadError, LoadedDocument};

/// Load the current text content of the system clipboard.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;
    Ok(LoadedDocument::from_text(&text, "clipboard"))
}
