//! Render text as a downloadable file.

pub mod pdf;

use crate::error::RenderError;
use std::str::FromStr;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Verbatim UTF-8 text.
    Text,
    /// Paginated PDF.
    Pdf,
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(RenderFormat::Text),
            "pdf" => Ok(RenderFormat::Pdf),
            other => Err(format!("unknown format: {other} (expected txt or pdf)")),
        }
    }
}

/// A rendered file ready to be sent or written.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: &'static str,
}

/// Render `text` in the requested format.
pub fn render(text: &str, format: RenderFormat) -> Result<RenderedFile, RenderError> {
    match format {
        RenderFormat::Text => Ok(RenderedFile {
            bytes: text.as_bytes().to_vec(),
            content_type: "text/plain; charset=utf-8",
            filename: "summary.txt",
        }),
        RenderFormat::Pdf => Ok(RenderedFile {
            bytes: pdf::render_pdf(text)?,
            content_type: "application/pdf",
            filename: "summary.pdf",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("txt".parse::<RenderFormat>().unwrap(), RenderFormat::Text);
        assert_eq!("PDF".parse::<RenderFormat>().unwrap(), RenderFormat::Pdf);
        assert!("docx".parse::<RenderFormat>().is_err());
    }

    #[test]
    fn test_text_is_verbatim() {
        let file = render("line one\nline *two* ✓", RenderFormat::Text).unwrap();
        assert_eq!(file.bytes, "line one\nline *two* ✓".as_bytes());
        assert_eq!(file.filename, "summary.txt");
    }

    #[test]
    fn test_pdf_has_header() {
        let file = render("hello", RenderFormat::Pdf).unwrap();
        assert!(file.bytes.starts_with(b"%PDF-"));
        assert_eq!(file.content_type, "application/pdf");
    }
}
