mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ExtractionSettings, FormatSettings, GenerationSettings, HistoryBackend, HistorySettings,
    LoggingSettings, ServerSettings, Settings,
};
