use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::application::ports::{HistoryError, HistoryRepository};
use crate::domain::{SummaryId, SummaryRecord};

/// History persisted as a JSON array, most recent record first.
///
/// The whole file is rewritten after every mutation through a temporary file
/// and a rename. The in-memory list only changes once the write succeeded.
pub struct JsonFileHistoryRepository {
    path: PathBuf,
    records: RwLock<Vec<SummaryRecord>>,
}

impl JsonFileHistoryRepository {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "Summary history loaded"
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, records: &[SummaryRecord]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_vec_pretty(records)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, content).await?;
        fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for JsonFileHistoryRepository {
    async fn prepend(&self, record: SummaryRecord) -> Result<(), HistoryError> {
        let mut records = self.records.write().await;
        let mut next = Vec::with_capacity(records.len() + 1);
        next.push(record);
        next.extend(records.iter().cloned());

        self.persist(&next).await?;
        *records = next;
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
        let Some(index) = records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        let mut next = records.clone();
        next.remove(index);

        self.persist(&next).await?;
        *records = next;
        Ok(true)
    }
}
