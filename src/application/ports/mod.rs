mod file_loader;
mod history_repository;
mod summarizer;

pub use file_loader::{FileLoader, FileLoaderError};
pub use history_repository::{HistoryError, HistoryRepository};
pub use summarizer::{Summarizer, SummarizerError, Summary};
