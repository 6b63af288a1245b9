use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load text from an EPUB file, chapter by chapter.
///
/// Chapters are joined with a blank line; chapter markup is stripped down
/// to its text content.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut doc = epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    let mut content = String::new();

    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }

        if let Some((chapter_content, _mime)) = doc.get_current_str() {
            let plain_text = extract_plain_text(&chapter_content);
            if plain_text.is_empty() {
                continue;
            }
            if !content.is_empty() {
                content.push_str("\n\n");
            }
            content.push_str(&plain_text);
        }
    }

    Ok(LoadedDocument::from_text(
        &content,
        format!("epub:{}", path.display()),
    ))
}

/// Drops tags, keeps text, and collapses blank lines.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epub_load_nonexistent_file() {
        let result = load("/nonexistent/path/book.epub");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_extract_plain_text() {
        let html = "<html><body><p>Hello World</p></body></html>";
        let result = extract_plain_text(html);
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_extract_plain_text_collapses_blank_lines() {
        let html = "<h1>Title</h1>\n\n   \n<p>  First line </p>\n<p>Second</p>";
        assert_eq!(extract_plain_text(html), "Title\nFirst line\nSecond");
    }
}
