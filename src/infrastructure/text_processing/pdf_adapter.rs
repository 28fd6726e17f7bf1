use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, UploadedDocument};

use super::blocking::run_parser;
use super::text_sanitizer::sanitize_extracted_text;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract(data: &[u8]) -> Result<String, FileLoaderError> {
        let raw = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        Ok(sanitize_extracted_text(&raw))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id().as_uuid(),
            filename = %document.filename(),
        )
    )]
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        if document.content_type() != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type().as_mime().to_string(),
            ));
        }

        let data = document.data().to_vec();
        let text = run_parser("PDF", move || Self::extract(&data)).await?;

        tracing::info!(chars = text.len(), "PDF text extraction complete");
        Ok(text)
    }
}
