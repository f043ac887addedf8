//! PDF text extraction via `pdf-extract`.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use super::{DocumentExtractor, ExtractionError};

const PDF_MAGIC: &[u8] = b"%PDF";

/// Extracts the concatenated text of every page of a PDF.
pub struct PdfExtractor;

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError> {
        // pdf-extract is CPU-bound and may panic on malformed input; the
        // blocking pool isolates both.
        tokio::task::spawn_blocking(move || extract_pdf_text(&document))
            .await
            .map_err(|e| ExtractionError::Unreadable(format!("PDF parser aborted: {e}")))?
    }
}

/// Synchronous extraction from an in-memory PDF.
pub fn extract_pdf_text(document: &[u8]) -> Result<String, ExtractionError> {
    if document.is_empty() {
        return Err(ExtractionError::Empty);
    }
    if !document.starts_with(PDF_MAGIC) {
        return Err(ExtractionError::Unreadable(
            "file is not a PDF document".to_string(),
        ));
    }

    let text = pdf_extract::extract_text_from_mem(document)
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }

    debug!(bytes = document.len(), chars = text.chars().count(), "Extracted PDF text");
    Ok(text)
}
