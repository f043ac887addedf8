//! Document extraction — turns an uploaded resume file into plain text.
//!
//! Extraction failures are terminal for the request: no retry, no partial text.

pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Uploaded document is empty")]
    Empty,

    #[error("Could not parse document: {0}")]
    Unreadable(String),

    #[error("Document contains no extractable text")]
    NoText,
}

/// Extracts plain text from raw document bytes.
///
/// Carried in `AppState` as `Arc<dyn DocumentExtractor>`.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError>;
}
