//! PDF Text Extractor — turns an uploaded résumé PDF into one string.
//!
//! Pages are concatenated in page order with nothing inserted between them.
//! `pdf-extract` either yields every page or fails for the document, so one
//! unreadable page aborts the extraction: the caller never sees partial text.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    UnreadablePdf(String),
}

/// Extracts text on the blocking pool. Parser panics are reported as
/// `UnreadablePdf` instead of tearing down the request task.
pub async fn extract_text(file_bytes: Bytes) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_text_blocking(&file_bytes))
        .await
        .map_err(|e| ExtractError::UnreadablePdf(format!("PDF parser aborted: {e}")))?
}

pub fn extract_text_blocking(file_bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(file_bytes)
        .map_err(|e| ExtractError::UnreadablePdf(e.to_string()))?;
    debug!("Parsed PDF: {} pages, {} bytes", pages.len(), file_bytes.len());
    Ok(pages.concat())
}
