//! Axum route handlers for the document panels.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::chain::PromptTemplate;
use crate::documents::forms::{CoverLetterForm, LinkedInForm, ResumeForm};
use crate::documents::prompts::{COVER_LETTER_PROMPT, LINKEDIN_PROMPT, RESUME_PROMPT};
use crate::errors::AppError;
use crate::forms::submit;
use crate::state::AppState;

/// How the client should display `output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Markdown,
    Text,
}

#[derive(Debug, Serialize)]
pub struct GeneratedDocument {
    /// Model output, verbatim.
    pub output: String,
    pub format: OutputFormat,
}

/// POST /api/v1/resume
pub async fn handle_resume(
    State(state): State<AppState>,
    Json(form): Json<ResumeForm>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let output = submit(&state.chain, &PromptTemplate::new(RESUME_PROMPT), &form).await?;
    Ok(Json(GeneratedDocument {
        output,
        format: OutputFormat::Markdown,
    }))
}

/// POST /api/v1/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(form): Json<CoverLetterForm>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let output = submit(&state.chain, &PromptTemplate::new(COVER_LETTER_PROMPT), &form).await?;
    Ok(Json(GeneratedDocument {
        output,
        format: OutputFormat::Markdown,
    }))
}

/// POST /api/v1/linkedin-summary
pub async fn handle_linkedin_summary(
    State(state): State<AppState>,
    Json(form): Json<LinkedInForm>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let output = submit(&state.chain, &PromptTemplate::new(LINKEDIN_PROMPT), &form).await?;
    Ok(Json(GeneratedDocument {
        output,
        format: OutputFormat::Text,
    }))
}
