//! Form handling shared by every feature panel.
//!
//! A panel form is a flat set of named string fields. Each field name doubles
//! as the placeholder name in the panel's prompt template.

use tracing::info;

use crate::chain::{ChainRunner, PromptTemplate, RenderContext};
use crate::errors::AppError;

pub trait FeatureForm {
    /// Panel name used in logs.
    const PANEL: &'static str;

    /// `(field name, value)` pairs, in form order.
    fn fields(&self) -> Vec<(&'static str, &str)>;

    /// Rejects blank fields. Values are otherwise passed through untouched.
    fn validate(&self) -> Result<(), AppError> {
        for (name, value) in self.fields() {
            ensure_filled(name, value)?;
        }
        Ok(())
    }

    fn render_context(&self) -> RenderContext {
        self.fields()
            .into_iter()
            .fold(RenderContext::new(), |ctx, (name, value)| ctx.with(name, value))
    }
}

pub fn ensure_filled(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} cannot be empty")));
    }
    Ok(())
}

/// Validates `form`, renders `template` with its fields and returns the model output.
pub async fn submit<F: FeatureForm>(
    chain: &ChainRunner,
    template: &PromptTemplate,
    form: &F,
) -> Result<String, AppError> {
    form.validate()?;

    let field_sizes: Vec<String> = form
        .fields()
        .iter()
        .map(|(name, value)| format!("{name}={}", value.len()))
        .collect();
    info!("{} submitted ({})", F::PANEL, field_sizes.join(", "));

    let output = chain.run(template, &form.render_context()).await?;

    info!("{} completed: {} chars", F::PANEL, output.len());
    Ok(output)
}
