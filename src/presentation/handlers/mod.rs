mod endpoint_config;
mod error;
mod health;
mod summaries;

pub use endpoint_config::{get_config_handler, update_config_handler};
pub use error::ErrorResponse;
pub use health::health_handler;
pub use summaries::{
    SummarizeTextRequest, SummaryResponse, delete_history_handler, get_summary_handler,
    list_history_handler, summarize_document_handler, summarize_text_handler,
};
