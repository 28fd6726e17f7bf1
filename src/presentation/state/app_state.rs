use std::sync::Arc;

use crate::application::ports::{FileLoader, Summarizer};
use crate::application::services::{EndpointConfigStore, SummarizationService};

pub struct AppState<F: ?Sized, S: ?Sized>
where
    F: FileLoader,
    S: Summarizer,
{
    pub summarization_service: Arc<SummarizationService<F, S>>,
    pub config_store: Arc<EndpointConfigStore>,
    pub max_upload_bytes: usize,
}

impl<F: ?Sized, S: ?Sized> Clone for AppState<F, S>
where
    F: FileLoader,
    S: Summarizer,
{
    fn clone(&self) -> Self {
        Self {
            summarization_service: Arc::clone(&self.summarization_service),
            config_store: Arc::clone(&self.config_store),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
