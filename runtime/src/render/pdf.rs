//! Minimal paginated PDF writer.
//!
//! A4 portrait, Helvetica 12 pt, 10 mm side and top margins, 10 mm line
//! height, automatic page break 15 mm above the bottom edge. Each input line
//! is word-wrapped to the printable width. Characters outside Latin-1 are
//! written as `?`.

use crate::error::RenderError;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

// Layout in PDF points (1 mm ≈ 2.835 pt).
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 28;
const BOTTOM_MARGIN: i64 = 43;
const LINE_HEIGHT: i64 = 28;
const FONT_SIZE: i64 = 12;
/// Average Helvetica glyph advance in 1/1000 em.
const AVG_GLYPH_WIDTH: i64 = 556;

/// Characters that fit on one printed line.
pub const LINE_CHARS: usize =
    ((PAGE_WIDTH - 2 * MARGIN) * 1000 / (FONT_SIZE * AVG_GLYPH_WIDTH)) as usize;

/// Printed lines per page.
pub const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - MARGIN - BOTTOM_MARGIN) / LINE_HEIGHT) as usize;

/// Render `text` as a PDF document.
pub fn render_pdf(text: &str) -> Result<Vec<u8>, RenderError> {
    let lines: Vec<String> = text
        .split('\n')
        .flat_map(|line| wrap_line(line.trim_end_matches('\r'), LINE_CHARS))
        .collect();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    // `split` always yields at least one (possibly empty) row, so there is
    // always at least one page.
    let mut kids: Vec<Object> = Vec::new();
    for chunk in lines.chunks(LINES_PER_PAGE) {
        let page_id = add_page(&mut doc, pages_id, resources_id, chunk)?;
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(page_count),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(out)
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    lines: &[String],
) -> Result<ObjectId, RenderError> {
    let mut operations = Vec::with_capacity(lines.len() * 5);
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let top = MARGIN + i as i64 * LINE_HEIGHT;
        let baseline = PAGE_HEIGHT - top - (LINE_HEIGHT + FONT_SIZE) / 2;
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec!["F1".into(), Object::Integer(FONT_SIZE)],
        ));
        operations.push(Operation::new(
            "Td",
            vec![Object::Integer(MARGIN), Object::Integer(baseline)],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_latin1(line), StringFormat::Literal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations }
        .encode()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH),
            Object::Integer(PAGE_HEIGHT),
        ],
    }))
}

/// Greedy word wrap. Words longer than `width` are split. An empty line
/// still occupies one row.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split(' ') {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            rows.push(word.drain(..width).collect());
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width && current_len > 0 {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn to_latin1(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c as u32 {
            0x09 => b' ',
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_and_empty_lines() {
        assert_eq!(wrap_line("hello world", 20), vec!["hello world"]);
        assert_eq!(wrap_line("", 20), vec![""]);
    }

    #[test]
    fn test_wrap_breaks_on_spaces() {
        assert_eq!(
            wrap_line("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_line("abcdefghijkl xy", 5), vec!["abcde", "fghij", "kl xy"]);
    }

    #[test]
    fn test_latin1_mapping() {
        assert_eq!(to_latin1("café\t✓"), vec![b'c', b'a', b'f', 0xE9, b' ', b'?']);
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(LINE_CHARS, 80);
        assert_eq!(LINES_PER_PAGE, 27);
    }

    #[test]
    fn test_automatic_page_breaks() {
        let text = (0..100).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let bytes = render_pdf(&text).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 4);
    }

    #[test]
    fn test_empty_text_has_one_page() {
        let bytes = render_pdf("").unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
