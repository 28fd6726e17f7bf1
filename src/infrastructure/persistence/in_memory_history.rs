use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{HistoryError, HistoryRepository};
use crate::domain::{SummaryId, SummaryRecord};

#[derive(Default)]
pub struct InMemoryHistoryRepository {
    records: RwLock<Vec<SummaryRecord>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn prepend(&self, record: SummaryRecord) -> Result<(), HistoryError> {
        self.records.write().await.insert(0, record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SummaryRecord>, HistoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: SummaryId) -> Result<Option<SummaryRecord>, HistoryError> {
        Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn delete(&self, id: SummaryId) -> Result<bool, HistoryError> {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
