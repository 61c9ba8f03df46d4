//! PDF text extraction.

use crate::error::ExtractionError;
use std::path::Path;

/// Read every page of the PDF at `path` in order and return the trimmed text.
pub fn text_from_file(path: &Path) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| ExtractionError::UnreadableDocument(e.to_string()))?;
    Ok(text.trim().to_string())
}
