use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{ConfigurationError, EndpointConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub text: String,
    /// The remote model reports no score; this is a fixed approximation.
    pub confidence: f32,
    pub processing_time: Duration,
}

/// Turns a text payload into a summary using the deployment described by
/// `config`. Implementations make at most one remote call per invocation.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        content: &str,
        config: &EndpointConfig,
    ) -> Result<Summary, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("summarization endpoint is not configured: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("upstream returned no summary content")]
    EmptyResponse,
    #[error("request failed: {0}")]
    Transport(String),
}
