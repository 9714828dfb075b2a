//! Per-page text extraction backed by `lopdf`.
//!
//! A page that fails extraction (malformed content stream, image-only page)
//! contributes an empty string; it never aborts the rest of the document.

use std::path::Path;

use lopdf::Document;

use crate::error::DecantError;

/// Ordered per-page text of a single PDF document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// One entry per page, in document order. Empty when the page had no
    /// extractable text.
    pub pages: Vec<String>,
}

impl ExtractedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Joins the per-page strings with a single newline separator, preserving
    /// page order. An N-page document always produces N-1 separators.
    pub fn join(&self) -> String {
        self.pages.join("\n")
    }

    /// Character count of the joined text, in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        // Separator chars are part of the reported total.
        self.join().chars().count()
    }
}

/// Opens and parses the PDF at `path`.
///
/// Encrypted documents are rejected up front: password handling is out of
/// scope and extracting from one silently would produce garbage.
pub fn open_document(path: &Path) -> Result<Document, DecantError> {
    let document = Document::load(path).map_err(|source| DecantError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    if document.is_encrypted() {
        return Err(DecantError::Encrypted {
            path: path.to_path_buf(),
        });
    }

    Ok(document)
}

/// Extracts the text of every page in document order.
///
/// lopdf keys pages by 1-indexed page number, so iterating the page map in
/// key order walks the document front to back. lopdf also appends one
/// trailing newline to each page's text; exactly that one is stripped so the
/// join separator count stays exact, while any newlines belonging to the page
/// itself are left untouched.
pub fn extract_pages(document: &Document) -> ExtractedDocument {
    let pages = document
        .get_pages()
        .into_keys()
        .map(|page_number| {
            document
                .extract_text(&[page_number])
                .map(strip_page_newline)
                .unwrap_or_default()
        })
        .collect();

    ExtractedDocument { pages }
}

/// Removes the single newline lopdf appends to a page's text, and nothing
/// more: a page genuinely ending in a blank line keeps it.
fn strip_page_newline(text: String) -> String {
    match text.strip_suffix('\n') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_preserves_page_order() {
        let doc = ExtractedDocument {
            pages: vec!["first".into(), "second".into(), "third".into()],
        };
        assert_eq!(doc.join(), "first\nsecond\nthird");
    }

    #[test]
    fn test_join_empty_page_yields_empty_segment() {
        let doc = ExtractedDocument {
            pages: vec!["A".into(), String::new(), "B".into()],
        };
        assert_eq!(doc.join(), "A\n\nB");
        assert_eq!(doc.char_count(), 4);
        assert_eq!(doc.page_count(), 3);
    }

    #[test]
    fn test_join_single_page_has_no_separator() {
        let doc = ExtractedDocument {
            pages: vec!["only".into()],
        };
        assert_eq!(doc.join(), "only");
    }

    #[test]
    fn test_join_no_pages() {
        let doc = ExtractedDocument { pages: Vec::new() };
        assert_eq!(doc.join(), "");
        assert_eq!(doc.char_count(), 0);
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_char_count_is_unicode_scalars_not_bytes() {
        let doc = ExtractedDocument {
            pages: vec!["héllo".into()],
        };
        assert_eq!(doc.char_count(), 5);
    }

    #[test]
    fn test_strip_page_newline_removes_exactly_one() {
        assert_eq!(strip_page_newline("A\n".into()), "A");
        assert_eq!(strip_page_newline("A\n\n".into()), "A\n");
        assert_eq!(strip_page_newline("A".into()), "A");
        assert_eq!(strip_page_newline(String::new()), "");
    }

    #[test]
    fn test_open_document_missing_file() {
        let err = open_document(Path::new("no_such_file_xyz.pdf")).unwrap_err();
        assert!(matches!(err, DecantError::Input { .. }));
    }
}
