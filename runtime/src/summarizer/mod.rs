//! Summarization: condense normalized text through an external model.

pub mod gemini;

use crate::error::SummarizationError;
use async_trait::async_trait;

/// Maximum number of characters sent upstream. Longer input is cut silently.
pub const MAX_INPUT_CHARS: usize = 10_000;

/// Outcome of a single summarization call.
pub type SummaryResult = Result<String, SummarizationError>;

/// A text summarization backend.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text`. Exactly one upstream attempt; no retries.
    async fn summarize(&self, text: &str) -> SummaryResult;
}

/// The first `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
