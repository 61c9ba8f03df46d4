//! Shared helpers for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use docsum_runtime::acquisition::http_client::HttpClient;
use docsum_runtime::error::SummarizationError;
use docsum_runtime::extraction::Extractor;
use docsum_runtime::pipeline::Pipeline;
use docsum_runtime::summarizer::{Summarizer, SummaryResult};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted summarizer behaviour.
pub enum Reply {
    /// Return the input unchanged.
    Echo,
    /// Return a fixed summary.
    Fixed(&'static str),
    /// Fail as if the service were unreachable.
    Transport(&'static str),
    /// Fail with an upstream status.
    Status(u16),
}

/// Summarizer stub that records every input it receives.
pub struct StubSummarizer {
    reply: Reply,
    pub seen: Mutex<Vec<String>>,
}

impl StubSummarizer {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, text: &str) -> SummaryResult {
        self.seen.lock().unwrap().push(text.to_string());
        match &self.reply {
            Reply::Echo => Ok(text.to_string()),
            Reply::Fixed(summary) => Ok(summary.to_string()),
            Reply::Transport(msg) => Err(SummarizationError::Transport(msg.to_string())),
            Reply::Status(status) => Err(SummarizationError::Status { status: *status }),
        }
    }
}

/// Pipeline staging documents in `scratch` and summarizing with `stub`.
pub fn pipeline(stub: Arc<StubSummarizer>, scratch: &Path) -> Pipeline {
    let extractor = Extractor::new(
        HttpClient::new().unwrap(),
        scratch.to_path_buf(),
        Duration::from_secs(5),
    );
    Pipeline::new(extractor, stub)
}

/// Number of entries left in a scratch directory.
pub fn scratch_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
