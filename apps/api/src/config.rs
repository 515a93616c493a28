use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `cargo run` talks to a local Ollama.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Number of most recent interview turns replayed into the prompt.
    /// `None` replays the whole conversation.
    pub interview_history_window: Option<usize>,
    /// Idle interview sessions are dropped after this many seconds; 0 keeps them forever.
    pub interview_session_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_base_url: env_or("OLLAMA_BASE_URL", DEFAULT_BASE_URL),
            ollama_model: env_or("OLLAMA_MODEL", DEFAULT_MODEL),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 300)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            interview_history_window: match std::env::var("INTERVIEW_HISTORY_WINDOW") {
                Ok(raw) => Some(raw.parse::<usize>().with_context(|| {
                    format!("INTERVIEW_HISTORY_WINDOW must be a non-negative integer, got '{raw}'")
                })?),
                Err(_) => None,
            },
            interview_session_ttl_secs: parse_env("INTERVIEW_SESSION_TTL_SECS", 3600)?,
        })
    }
}

impl Config {
    pub fn interview_session_ttl(&self) -> Option<Duration> {
        (self.interview_session_ttl_secs > 0)
            .then(|| Duration::from_secs(self.interview_session_ttl_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_base_url: DEFAULT_BASE_URL.to_string(),
            ollama_model: DEFAULT_MODEL.to_string(),
            llm_timeout_secs: 300,
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            interview_history_window: None,
            interview_session_ttl_secs: 3600,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
