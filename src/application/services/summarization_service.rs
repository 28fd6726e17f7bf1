use std::sync::Arc;

use crate::application::ports::{
    FileLoader, HistoryError, HistoryRepository, Summarizer, SummarizerError, Summary,
};
use crate::domain::{
    ConfigurationError, ExtractionOutcome, SummaryId, SummaryKind, SummaryRecord,
    UploadedDocument, format_character_count, format_file_size,
};

use super::endpoint_config_store::EndpointConfigStore;
use super::extraction_service::{ExtractionError, ExtractionService};

pub const TEXT_SUMMARY_FILENAME: &str = "Text Summary";

/// Result of one successful summarization, already recorded in history.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    pub record: SummaryRecord,
    pub summary: Summary,
    pub extraction: ExtractionOutcome,
}

pub struct SummarizationService<F: ?Sized, S: ?Sized>
where
    F: FileLoader,
    S: Summarizer,
{
    extraction: ExtractionService<F>,
    summarizer: Arc<S>,
    history: Arc<dyn HistoryRepository>,
    config: Arc<EndpointConfigStore>,
}

impl<F: ?Sized, S: ?Sized> SummarizationService<F, S>
where
    F: FileLoader,
    S: Summarizer,
{
    pub fn new(
        file_loader: Arc<F>,
        summarizer: Arc<S>,
        history: Arc<dyn HistoryRepository>,
        config: Arc<EndpointConfigStore>,
    ) -> Self {
        Self {
            extraction: ExtractionService::new(file_loader),
            summarizer,
            history,
            config,
        }
    }

    #[tracing::instrument(
        skip(self, document),
        fields(document_id = %document.id().as_uuid(), filename = %document.filename())
    )]
    pub async fn summarize_document(
        &self,
        document: UploadedDocument,
    ) -> Result<SummaryOutcome, SummarizationError> {
        let config = self.config.snapshot().await;
        config.validate()?;

        let extraction = self.extraction.extract(&document).await?;
        if extraction.is_degraded() {
            tracing::warn!("Summarizing placeholder text instead of document content");
        }

        let summary = self.summarizer.summarize(extraction.text(), &config).await?;

        let kind = if document.content_type().is_image() {
            SummaryKind::Image
        } else {
            SummaryKind::Document
        };
        let record = SummaryRecord::new(
            kind,
            document.filename().to_string(),
            summary.text.clone(),
            format_file_size(document.size_bytes()),
        );
        self.history.prepend(record.clone()).await?;

        tracing::info!(
            summary_id = %record.id,
            processing_ms = summary.processing_time.as_millis() as u64,
            "Document summarized"
        );

        Ok(SummaryOutcome {
            record,
            summary,
            extraction: extraction.outcome(),
        })
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn summarize_text(&self, text: &str) -> Result<SummaryOutcome, SummarizationError> {
        if text.trim().is_empty() {
            return Err(SummarizationError::EmptyInput);
        }

        let config = self.config.snapshot().await;
        config.validate()?;

        let summary = self.summarizer.summarize(text, &config).await?;

        let record = SummaryRecord::new(
            SummaryKind::Document,
            TEXT_SUMMARY_FILENAME.to_string(),
            summary.text.clone(),
            format_character_count(text),
        );
        self.history.prepend(record.clone()).await?;

        tracing::info!(summary_id = %record.id, "Text summarized");

        Ok(SummaryOutcome {
            record,
            summary,
            extraction: ExtractionOutcome::Extracted,
        })
    }

    pub async fn history(&self) -> Result<Vec<SummaryRecord>, SummarizationError> {
        Ok(self.history.list().await?)
    }

    pub async fn summary(&self, id: SummaryId) -> Result<SummaryRecord, SummarizationError> {
        self.history
            .get(id)
            .await?
            .ok_or(SummarizationError::NotFound(id))
    }

    pub async fn delete_history(&self, id: SummaryId) -> Result<(), SummarizationError> {
        if self.history.delete(id).await? {
            tracing::info!(summary_id = %id, "Summary removed from history");
            Ok(())
        } else {
            Err(SummarizationError::NotFound(id))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("text to summarize is empty")]
    EmptyInput,
    #[error("summarization endpoint is not configured: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Summarizer(#[from] SummarizerError),
    #[error("history: {0}")]
    History(#[from] HistoryError),
    #[error("summary {0} not found")]
    NotFound(SummaryId),
}
