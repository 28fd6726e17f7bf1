use async_trait::async_trait;

use crate::domain::UploadedDocument;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("file is {size_bytes} bytes, above the {limit_bytes} byte limit")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
