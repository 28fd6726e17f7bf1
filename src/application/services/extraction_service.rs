use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ExtractionResult, UploadedDocument};

#[derive(Debug, thiserror::Error)]
#[error("could not extract text from {filename}: {source}")]
pub struct ExtractionError {
    pub filename: String,
    #[source]
    pub source: FileLoaderError,
}

/// Turns an uploaded document into the text payload sent for summarization.
///
/// Unsupported types, images and parsed documents that yield no text all
/// produce a placeholder describing the file instead of failing.
pub struct ExtractionService<F: ?Sized>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
}

impl<F: ?Sized> ExtractionService<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>) -> Self {
        Self { file_loader }
    }

    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id().as_uuid(),
            filename = %document.filename(),
            content_type = ?document.content_type(),
            size_bytes = document.size_bytes(),
        )
    )]
    pub async fn extract(
        &self,
        document: &UploadedDocument,
    ) -> Result<ExtractionResult, ExtractionError> {
        let content_type = document.content_type();
        let filename = document.filename();

        let text = match self.file_loader.extract_text(document).await {
            Ok(text) => text,
            Err(FileLoaderError::UnsupportedContentType(mime)) => {
                tracing::warn!(mime = %mime, "No extractor for file type, sending metadata only");
                return Ok(ExtractionResult::placeholder(
                    filename,
                    unsupported_placeholder(document),
                ));
            }
            Err(source) => {
                tracing::error!(error = %source, "Text extraction failed");
                return Err(ExtractionError {
                    filename: filename.to_string(),
                    source,
                });
            }
        };

        if content_type.is_image() {
            return Ok(ExtractionResult::placeholder(filename, text));
        }

        if content_type.is_parsed() && text.trim().is_empty() {
            tracing::warn!("Document parsed but contained no text");
            return Ok(ExtractionResult::placeholder(
                filename,
                empty_document_placeholder(document),
            ));
        }

        tracing::info!(chars = text.chars().count(), "Text extraction complete");
        Ok(ExtractionResult::extracted(filename, text))
    }
}

fn unsupported_placeholder(document: &UploadedDocument) -> String {
    let mime = match document.mime_type().trim() {
        "" => "unknown",
        mime => mime,
    };
    format!(
        "Document: {}\n\nFile type: {}\n\nNo text extractor is available for this file type, so only its name and type are included.",
        document.filename(),
        mime,
    )
}

fn empty_document_placeholder(document: &UploadedDocument) -> String {
    format!(
        "Content extracted from {}: {}\n\nThe file was read successfully but contains no extractable text. It may consist only of scanned pages, images or empty sheets.",
        document.content_type(),
        document.filename(),
    )
}
