//! Keyword emphasis.
//!
//! All keywords are compiled into one case-insensitive, word-bounded
//! alternation and the text is scanned once. Matches never overlap and the
//! longest keyword wins at a given position.
//!
//! Each side of a match is handled separately: a `*` already adjacent to the
//! match serves as that side's marker, otherwise one is inserted. A single
//! `*` between two keywords therefore closes the first and opens the second.
//! Running the highlighter twice changes nothing.

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Emphasis marker placed on both sides of a keyword.
pub const MARKER: char = '*';

/// Wrap every whole-word, case-insensitive occurrence of each keyword in
/// `*…*`. The matched text keeps its original casing.
pub fn highlight(text: &str, keywords: &[String]) -> String {
    let Some(pattern) = keyword_pattern(keywords) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;

    for m in pattern.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if !text[..m.start()].ends_with(MARKER) {
            out.push(MARKER);
        }
        out.push_str(m.as_str());
        if !text[m.end()..].starts_with(MARKER) {
            out.push(MARKER);
        }
        last = m.end();
    }

    out.push_str(&text[last..]);
    out
}

fn keyword_pattern(keywords: &[String]) -> Option<Regex> {
    let mut terms: Vec<&str> = keywords
        .iter()
        .map(String::as_str)
        .filter(|k| !k.is_empty())
        .collect();
    if terms.is_empty() {
        return None;
    }

    // Leftmost-first alternation: longer terms must come first.
    terms.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("keyword pattern rejected, leaving text unhighlighted: {e}");
            None
        }
    }
}
