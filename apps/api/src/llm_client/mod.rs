/// LLM Client — the single point of entry for every model call in the coach API.
///
/// ARCHITECTURAL RULE: no other module talks to the inference backend directly.
/// Panels go through `chain::ChainRunner`, which holds an `Arc<dyn CompletionModel>`.
///
/// Backend: a local Ollama process (`POST /api/generate`, non-streaming).
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
/// Model served by Ollama unless `OLLAMA_MODEL` overrides it.
pub const DEFAULT_MODEL: &str = "llama3.2";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed backend response: {0}")]
    Malformed(String),
}

/// Text completion seam. Production uses [`OllamaClient`]; tests inject fakes.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends the fully rendered prompt and returns the completion text verbatim.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, for logging and the feature listing.
    fn model_name(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    #[serde(default)]
    pub done: bool,
    pub prompt_eval_count: Option<u32>,
    pub eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Ollama-backed completion client. Built once at startup and shared.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl CompletionModel for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.generate_url())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let generated = parse_generate_response(&body)?;

        debug!(
            "Ollama call succeeded: model={}, prompt_tokens={:?}, output_tokens={:?}",
            self.model, generated.prompt_eval_count, generated.eval_count
        );

        Ok(generated.response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Decodes a non-streaming `/api/generate` body.
fn parse_generate_response(body: &str) -> Result<GenerateResponse, LlmError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Malformed(e.to_string()))?;
    if !parsed.done {
        return Err(LlmError::Malformed(
            "backend returned an unfinished generation".to_string(),
        ));
    }
    Ok(parsed)
}

/// Pulls the `error` field out of an Ollama error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<OllamaError>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}
