//! Fake completion models shared by unit tests across modules.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::llm_client::{CompletionModel, LlmError};

/// Records every prompt it receives and answers from a fixed script.
/// When the script runs out, the last reply is repeated.
pub struct RecordingModel {
    replies: Vec<String>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingModel {
    pub fn replying(reply: &str) -> Self {
        Self::scripted(&[reply])
    }

    pub fn scripted(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionModel for RecordingModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let mut prompts = self.prompts.lock().unwrap();
        let idx = prompts.len().min(self.replies.len().saturating_sub(1));
        prompts.push(prompt.to_string());
        Ok(self.replies.get(idx).cloned().unwrap_or_default())
    }

    fn model_name(&self) -> &str {
        "recording"
    }
}

/// Returns the prompt it was given.
pub struct EchoModel;

#[async_trait]
impl CompletionModel for EchoModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        Ok(prompt.to_string())
    }

    fn model_name(&self) -> &str {
        "echo"
    }
}

/// Always fails as if the backend were down.
pub struct FailingModel;

#[async_trait]
impl CompletionModel for FailingModel {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 503,
            message: "backend offline".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "failing"
    }
}

/// Holds every completion until the test calls `open`.
pub struct GatedModel {
    reply: String,
    entered: Notify,
    gate: Notify,
}

impl GatedModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            entered: Notify::new(),
            gate: Notify::new(),
        }
    }

    /// Resolves once a completion has started and is waiting on the gate.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Lets one waiting (or the next) completion through.
    pub fn open(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl CompletionModel for GatedModel {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        self.entered.notify_one();
        self.gate.notified().await;
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "gated"
    }
}
