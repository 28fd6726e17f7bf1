mod in_memory_history;
mod json_file_history;

pub use in_memory_history::InMemoryHistoryRepository;
pub use json_file_history::JsonFileHistoryRepository;
