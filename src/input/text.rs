use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Reads a whole file as UTF-8, mapping failures to [`LoadError`].
pub fn read_to_string(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a plain text document.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);
    let content = read_to_string(path)?;
    Ok(LoadedDocument::from_text(
        &content,
        format!("file:{}", path.display()),
    ))
}
