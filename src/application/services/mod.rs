mod endpoint_config_store;
mod extraction_service;
mod summarization_service;

pub use endpoint_config_store::{ConfigStatus, EndpointConfigStore};
pub use extraction_service::{ExtractionError, ExtractionService};
pub use summarization_service::{
    SummarizationError, SummarizationService, SummaryOutcome, TEXT_SUMMARY_FILENAME,
};
