//! Error types shared across the pipeline stages.

use thiserror::Error;

/// Configuration problems detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Failures while turning a source into text.
///
/// Network failures are not represented here: they degrade to empty text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unreadable document: {0}")]
    UnreadableDocument(String),

    #[error("scratch area unavailable: {0}")]
    Scratch(#[from] std::io::Error),
}

/// Caller-visible outcome when no usable text was obtained.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No valid input provided")]
    NoValidInput,
}

/// Failure of a single summarization call.
#[derive(Debug, Error)]
pub enum SummarizationError {
    #[error("Gemini API status {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SummarizationError {
    /// Upstream HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SummarizationError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Failure while producing a downloadable file.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}
