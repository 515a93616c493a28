//! Chain Runner — renders a prompt template and sends it to the completion model.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::chain::template::{PromptTemplate, RenderContext, TemplateError};
use crate::llm_client::{CompletionModel, LlmError};

#[derive(Debug, Error)]
pub enum ChainError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Model unavailable: {0}")]
    Model(#[from] LlmError),
}

/// Composes a [`PromptTemplate`] with the shared completion model.
/// Cheap to clone; every clone talks to the same model handle.
#[derive(Clone)]
pub struct ChainRunner {
    model: Arc<dyn CompletionModel>,
}

impl ChainRunner {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Renders `template` with `context` once, then completes it once.
    /// The model output is returned unmodified. Nothing is retried.
    pub async fn run(
        &self,
        template: &PromptTemplate,
        context: &RenderContext,
    ) -> Result<String, ChainError> {
        let prompt = template.render(context)?;
        debug!(
            "Dispatching prompt: {} chars, {} placeholders",
            prompt.len(),
            template.placeholders().len()
        );
        let output = self.model.complete(&prompt).await?;
        Ok(output)
    }
}
