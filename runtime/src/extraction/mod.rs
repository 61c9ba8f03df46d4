//! Source extraction: normalize any supported input into trimmed plain text.
//!
//! Network-backed sources are failure tolerant. A download that fails or
//! times out yields empty text rather than an error, as does a remote
//! document answering with a non-2xx status. Web pages are parsed whatever
//! the status. Only malformed document bytes are reported as
//! [`ExtractionError::UnreadableDocument`].

pub mod html;
pub mod pdf;
pub mod scratch;

use crate::acquisition::http_client::HttpClient;
use crate::error::ExtractionError;
use scratch::ScratchDocument;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed timeout for web page downloads.
pub const WEBPAGE_TIMEOUT_MS: u64 = 10_000;

/// One input document, exactly one kind per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Uploaded PDF bytes with the client-declared file name.
    FileBytes { bytes: Vec<u8>, filename: String },
    /// URL of a remote PDF.
    RemoteDocumentUrl(String),
    /// URL of a remote HTML page.
    WebPageUrl(String),
    /// Text supplied directly by the caller.
    InlineText(String),
}

impl InputSource {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            InputSource::FileBytes { .. } => "file",
            InputSource::RemoteDocumentUrl(_) => "document_url",
            InputSource::WebPageUrl(_) => "webpage_url",
            InputSource::InlineText(_) => "text",
        }
    }
}

/// Converts input sources into normalized text.
#[derive(Debug, Clone)]
pub struct Extractor {
    client: HttpClient,
    scratch_dir: PathBuf,
    fetch_timeout: Duration,
}

impl Extractor {
    /// Create an extractor staging documents in `scratch_dir`.
    ///
    /// `fetch_timeout` bounds remote document downloads; web pages always use
    /// [`WEBPAGE_TIMEOUT_MS`].
    pub fn new(client: HttpClient, scratch_dir: PathBuf, fetch_timeout: Duration) -> Self {
        Self {
            client,
            scratch_dir,
            fetch_timeout,
        }
    }

    /// Extract trimmed plain text from `source`. The result may be empty.
    pub async fn extract(&self, source: InputSource) -> Result<String, ExtractionError> {
        match source {
            InputSource::FileBytes { bytes, filename } => {
                debug!(filename = %filename, bytes = bytes.len(), "extracting uploaded document");
                self.document_text(bytes).await
            }
            InputSource::RemoteDocumentUrl(url) => self.fetch_document(&url).await,
            InputSource::WebPageUrl(url) => Ok(self.fetch_webpage(&url).await),
            InputSource::InlineText(text) => Ok(text.trim().to_string()),
        }
    }

    /// Stage `bytes` in the scratch area and parse them as a PDF.
    ///
    /// Runs on the blocking pool. The scratch file is removed before this
    /// returns, whatever the outcome; a parser panic counts as unreadable.
    async fn document_text(&self, bytes: Vec<u8>) -> Result<String, ExtractionError> {
        let dir = self.scratch_dir.clone();
        let joined = tokio::task::spawn_blocking(move || {
            let staged = ScratchDocument::stage(&dir, &bytes)?;
            debug!(scratch_id = %staged.id(), "staged document");
            pdf::text_from_file(staged.path())
        })
        .await;

        match joined {
            Ok(result) => result,
            Err(e) => Err(ExtractionError::UnreadableDocument(format!(
                "document parser aborted: {e}"
            ))),
        }
    }

    async fn fetch_document(&self, url: &str) -> Result<String, ExtractionError> {
        let timeout_ms = self.fetch_timeout.as_millis() as u64;
        let resp = match self.client.get(url, timeout_ms).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(url, "document fetch failed: {e:#}");
                return Ok(String::new());
            }
        };

        if !resp.is_success() {
            warn!(url, status = resp.status, "document fetch returned non-success status");
            return Ok(String::new());
        }

        debug!(
            url,
            final_url = %resp.final_url,
            content_type = resp.content_type.as_deref().unwrap_or("-"),
            bytes = resp.body.len(),
            "downloaded document"
        );
        self.document_text(resp.body).await
    }

    async fn fetch_webpage(&self, url: &str) -> String {
        let resp = match self.client.get(url, WEBPAGE_TIMEOUT_MS).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(url, "web page fetch failed: {e:#}");
                return String::new();
            }
        };

        if !resp.is_success() {
            debug!(url, status = resp.status, "parsing web page despite non-success status");
        }

        let body = resp.text();
        tokio::task::spawn_blocking(move || html::html_to_text(&body))
            .await
            .unwrap_or_default()
    }
}
