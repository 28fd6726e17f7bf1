use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryId(Uuid);

impl SummaryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SummaryId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SummaryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for SummaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    Document,
    Image,
}

/// One entry of the summary history. Records are never edited; they are
/// created after a successful summarization and removed only by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: SummaryId,
    pub kind: SummaryKind,
    pub filename: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub size_label: String,
}

impl SummaryRecord {
    pub fn new(kind: SummaryKind, filename: String, summary: String, size_label: String) -> Self {
        Self {
            id: SummaryId::new(),
            kind,
            filename,
            summary,
            created_at: Utc::now(),
            size_label,
        }
    }
}
