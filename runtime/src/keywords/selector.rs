//! Keyword selection: long words in first-occurrence order.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Minimum keyword length in word characters.
pub const MIN_KEYWORD_CHARS: usize = 6;

/// Maximum number of keywords returned.
pub const MAX_KEYWORDS: usize = 10;

static LONG_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w{6,}\b").unwrap());

/// Select up to [`MAX_KEYWORDS`] distinct words of at least
/// [`MIN_KEYWORD_CHARS`] word characters, case preserved.
///
/// Duplicates are detected case-sensitively and the first occurrence wins,
/// so the output order is the order of first appearance in `text`.
pub fn select_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for m in LONG_WORD_RE.find_iter(text) {
        if seen.insert(m.as_str()) {
            keywords.push(m.as_str().to_string());
            if keywords.len() == MAX_KEYWORDS {
                break;
            }
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        let keywords =
            select_keywords("Rivers shape valleys. Glaciers carve valleys and rivers erode.");
        assert_eq!(keywords, vec!["Rivers", "valleys", "Glaciers", "rivers"]);
    }

    #[test]
    fn test_short_words_are_ignored() {
        assert!(select_keywords("short words only here").is_empty());
        assert_eq!(select_keywords("abcde abcdef"), vec!["abcdef"]);
        assert!(select_keywords("").is_empty());
    }

    #[test]
    fn test_partial_words_are_not_split() {
        // "well-known" is two words; neither reaches six characters.
        assert!(select_keywords("well-known").is_empty());
        assert_eq!(select_keywords("snake_case_identifier"), vec!["snake_case_identifier"]);
    }

    #[test]
    fn test_cap_and_uniqueness() {
        let text = (0..30)
            .map(|i| format!("keyword{i:02} keyword{i:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        let keywords = select_keywords(&text);

        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "keyword00");
        assert_eq!(keywords[9], "keyword09");
        let unique: HashSet<_> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
        assert!(keywords.iter().all(|k| k.chars().count() >= MIN_KEYWORD_CHARS));
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(select_keywords("Größenwahn und Übermut"), vec!["Größenwahn", "Übermut"]);
    }

    #[test]
    fn test_error_text_yields_keywords() {
        let keywords = select_keywords("Error: Gemini API status 503");
        assert_eq!(keywords, vec!["Gemini", "status"]);

        let keywords = select_keywords("Error: error sending request for url");
        assert_eq!(keywords, vec!["sending", "request"]);
    }
}
