//! Pipeline orchestration: extract → summarize → select keywords → highlight.

use crate::acquisition::http_client::HttpClient;
use crate::config::Config;
use crate::error::InputError;
use crate::extraction::{Extractor, InputSource};
use crate::keywords::{highlight, select_keywords};
use crate::summarizer::gemini::GeminiClient;
use crate::summarizer::Summarizer;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Final output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSummary {
    /// Summary text, or a description of the summarization failure.
    pub summary: String,
    /// `summary` with every keyword wrapped in `*…*`.
    pub highlighted: String,
    /// Selected keywords in first-occurrence order.
    pub keywords: Vec<String>,
    /// Length of the extracted text in characters.
    pub original_length: usize,
    /// Length of `summary` in characters.
    pub summary_length: usize,
}

impl AnnotatedSummary {
    /// Post-process `summary` for a source text of `original_length` chars.
    pub fn annotate(summary: String, original_length: usize) -> Self {
        let keywords = select_keywords(&summary);
        let highlighted = highlight(&summary, &keywords);
        let summary_length = summary.chars().count();
        Self {
            summary,
            highlighted,
            keywords,
            original_length,
            summary_length,
        }
    }
}

/// The summarization pipeline. Shareable across concurrent requests.
#[derive(Clone)]
pub struct Pipeline {
    extractor: Extractor,
    summarizer: Arc<dyn Summarizer>,
}

impl Pipeline {
    pub fn new(extractor: Extractor, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            extractor,
            summarizer,
        }
    }

    /// Build the production pipeline (Gemini backend) from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let extractor = Extractor::new(
            HttpClient::new()?,
            config.scratch_dir.clone(),
            config.fetch_timeout,
        );
        let summarizer = GeminiClient::from_config(config)?;
        Ok(Self::new(extractor, Arc::new(summarizer)))
    }

    /// Run the pipeline for one request.
    ///
    /// Fails with [`InputError::NoValidInput`] when no source was given or no
    /// text could be extracted from it. A failed summarization does not fail
    /// the run: the error description becomes the summary.
    pub async fn run(&self, source: Option<InputSource>) -> Result<AnnotatedSummary, InputError> {
        let Some(source) = source else {
            info!("rejecting request without a recognized source");
            return Err(InputError::NoValidInput);
        };

        let started = Instant::now();
        let kind = source.kind();

        let text = match self.extractor.extract(source).await {
            Ok(text) => text,
            Err(e) => {
                warn!(source = kind, "extraction failed: {e}");
                return Err(InputError::NoValidInput);
            }
        };
        if text.is_empty() {
            info!(source = kind, "source produced no text");
            return Err(InputError::NoValidInput);
        }

        let original_length = text.chars().count();
        let summary = match self.summarizer.summarize(&text).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(source = kind, status = ?e.status(), "summarization failed: {e}");
                format!("Error: {e}")
            }
        };

        let annotated = AnnotatedSummary::annotate(summary, original_length);
        info!(
            source = kind,
            original_length,
            summary_length = annotated.summary_length,
            keywords = annotated.keywords.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "summary ready"
        );
        Ok(annotated)
    }
}
