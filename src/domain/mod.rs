mod document;
mod endpoint_config;
mod extraction;
mod size_label;
mod summary_record;

pub use document::{ContentType, DocumentId, UploadedDocument};
pub use endpoint_config::{
    ConfigurationError, DEFAULT_API_VERSION, DEFAULT_DEPLOYMENT, DEFAULT_ENDPOINT, EndpointConfig,
    EndpointConfigUpdate,
};
pub use extraction::{ExtractionOutcome, ExtractionResult};
pub use size_label::{format_character_count, format_file_size};
pub use summary_record::{SummaryId, SummaryKind, SummaryRecord};
