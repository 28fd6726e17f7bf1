use async_trait::async_trait;

use crate::domain::{SummaryId, SummaryRecord};

/// Ordered log of past summaries, most recent first.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn prepend(&self, record: SummaryRecord) -> Result<(), HistoryError>;

    async fn list(&self) -> Result<Vec<SummaryRecord>, HistoryError>;

    async fn get(&self, id: SummaryId) -> Result<Option<SummaryRecord>, HistoryError>;

    /// Removes the record with `id`, returning whether one existed.
    async fn delete(&self, id: SummaryId) -> Result<bool, HistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
