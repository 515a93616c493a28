//! Axum route handlers for the CV Analyzer.
//!
//! Mirrors the two-step flow of the panel: preview the extracted text, then
//! analyse it. `/cv/analyze` does both in one request.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chain::PromptTemplate;
use crate::cv::extractor::extract_text;
use crate::cv::prompts::ANALYZE_PROMPT;
use crate::errors::AppError;
use crate::forms::{submit, FeatureForm};
use crate::state::AppState;

/// Multipart field carrying the PDF.
const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, Deserialize)]
pub struct CvTextForm {
    pub cv_text: String,
}

impl FeatureForm for CvTextForm {
    const PANEL: &'static str = "CV Analyzer";

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![("cv_text", self.cv_text.as_str())]
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub extracted_text: String,
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// POST /api/v1/cv/extract
///
/// Returns the text of the uploaded PDF so the user can review it before analysis.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let file = read_pdf_upload(multipart).await?;
    let text = extract_text(file).await?;
    Ok(Json(ExtractResponse { text }))
}

/// POST /api/v1/cv/analyze
///
/// Extracts the uploaded PDF and runs the analysis prompt over the full text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let file = read_pdf_upload(multipart).await?;
    let extracted_text = extract_text(file).await?;

    if extracted_text.trim().is_empty() {
        return Err(AppError::Validation(
            "The PDF contains no extractable text (is it a scanned image?)".to_string(),
        ));
    }

    let form = CvTextForm {
        cv_text: extracted_text,
    };
    let feedback = submit(&state.chain, &PromptTemplate::new(ANALYZE_PROMPT), &form).await?;

    Ok(Json(AnalyzeResponse {
        extracted_text: form.cv_text,
        feedback,
    }))
}

/// POST /api/v1/cv/analyze-text
///
/// Analyses text that was extracted earlier (and possibly edited by the user).
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(form): Json<CvTextForm>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let feedback = submit(&state.chain, &PromptTemplate::new(ANALYZE_PROMPT), &form).await?;
    Ok(Json(FeedbackResponse { feedback }))
}

/// Pulls the `file` field out of a multipart body.
async fn read_pdf_upload(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Invalid multipart body", e))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        if let Some(content_type) = field.content_type() {
            if content_type != "application/pdf" {
                warn!("CV upload declared content type {content_type}; parsing anyway");
            }
        }
        let file_name = field.file_name().unwrap_or("<unnamed>").to_string();

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read upload", e))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        info!("CV upload received: {file_name}, {} bytes", bytes.len());
        return Ok(bytes);
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

/// Oversized bodies keep their 413; everything else is a malformed request.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {}", err.body_text()))
    } else {
        AppError::Validation(format!("{context}: {}", err.body_text()))
    }
}
