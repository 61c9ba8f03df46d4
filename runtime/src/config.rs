//! Process configuration, read once from the environment at startup.

use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Env file consulted for variables the process environment does not set.
pub const ENV_FILE: &str = ".env";

/// Default Gemini REST base URL.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration for the server and CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. Never empty.
    pub api_key: String,
    /// Gemini model name (e.g. `gemini-pro`).
    pub model: String,
    /// Base URL of the Gemini REST API.
    pub endpoint: String,
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory where fetched/uploaded documents are staged.
    pub scratch_dir: PathBuf,
    /// Timeout for remote document downloads.
    pub fetch_timeout: Duration,
    /// Timeout for the summarization call.
    pub summary_timeout: Duration,
}

impl Config {
    /// Load from process environment variables, falling back to
    /// [`ENV_FILE`] in the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = read_env_file(Path::new(ENV_FILE));
        Self::from_lookup(with_fallback(|key| std::env::var(key).ok(), file))
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset. Fails if `GEMINI_API_KEY` is
    /// missing or a numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let port = match get("PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };

        let fetch_timeout = parse_millis(
            get("DOCSUM_FETCH_TIMEOUT_MS"),
            "DOCSUM_FETCH_TIMEOUT_MS",
            30_000,
        )?;
        let summary_timeout = parse_millis(
            get("DOCSUM_SUMMARY_TIMEOUT_MS"),
            "DOCSUM_SUMMARY_TIMEOUT_MS",
            60_000,
        )?;

        Ok(Self {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            endpoint: get("GEMINI_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string())
                .trim_end_matches('/')
                .to_string(),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            scratch_dir: get("DOCSUM_SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            fetch_timeout,
            summary_timeout,
        })
    }

    /// `host:port` string suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Variables defined in a dotenv-style file. A missing file defines none.
pub fn read_env_file(path: &Path) -> HashMap<String, String> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) => {
            if !e.not_found() {
                warn!(path = %path.display(), "ignoring env file: {e}");
            }
            return HashMap::new();
        }
    };

    let mut vars = HashMap::new();
    for entry in entries {
        match entry {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(e) => warn!(path = %path.display(), "skipping env file line: {e}"),
        }
    }
    vars
}

/// Consult `primary` first, then `fallback`.
fn with_fallback<F>(
    primary: F,
    fallback: HashMap<String, String>,
) -> impl Fn(&str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    move |key| primary(key).or_else(|| fallback.get(key).cloned())
}

fn parse_millis(
    value: Option<String>,
    key: &'static str,
    default_ms: u64,
) -> Result<Duration, ConfigError> {
    match value {
        Some(v) => v
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::Invalid { key, value: v }),
        None => Ok(Duration::from_millis(default_ms)),
    }
}
