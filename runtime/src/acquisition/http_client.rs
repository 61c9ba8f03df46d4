//! Shared HTTP client for downloading remote documents and web pages.
//!
//! Wraps a single pooled `reqwest::Client`. Every call carries its own
//! timeout so callers can bound slow hosts independently.

use anyhow::{bail, Context, Result};
use std::time::Duration;
use tracing::debug;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("docsum/", env!("CARGO_PKG_VERSION"));

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Pooled HTTP client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client with the docsum user agent.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }

    /// GET `url` and buffer the whole body.
    ///
    /// Non-2xx statuses are returned as responses, not errors. Invalid URLs,
    /// transport failures and timeouts are errors.
    pub async fn get(&self, url: &str, timeout_ms: u64) -> Result<HttpResponse> {
        let parsed = url::Url::parse(url).with_context(|| format!("invalid url: {url:?}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("unsupported scheme: {}", parsed.scheme());
        }

        let resp = self
            .client
            .get(parsed)
            .timeout(Duration::from_millis(timeout_ms))
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = resp
            .bytes()
            .await
            .with_context(|| format!("reading body of {url}"))?
            .to_vec();

        debug!(url, status, bytes = body.len(), "fetched");

        Ok(HttpResponse {
            final_url,
            status,
            content_type,
            body,
        })
    }
}
