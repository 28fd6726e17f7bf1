use std::path::PathBuf;

use ::config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::{DEFAULT_API_VERSION, DEFAULT_DEPLOYMENT, DEFAULT_ENDPOINT, EndpointConfig};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub azure_openai: EndpointConfig,
    pub generation: GenerationSettings,
    pub extraction: ExtractionSettings,
    pub history: HistorySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_mb: usize,
}

/// Sampling parameters sent with every chat-completion request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.3,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub text: FormatSettings,
    pub pdf: FormatSettings,
    pub word: FormatSettings,
    pub spreadsheet: FormatSettings,
    pub image: FormatSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatSettings {
    pub enabled: bool,
    pub max_file_size_mb: usize,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        let enabled = |max_file_size_mb| FormatSettings {
            enabled: true,
            max_file_size_mb,
        };
        Self {
            text: enabled(10),
            pdf: enabled(25),
            word: enabled(25),
            spreadsheet: enabled(25),
            image: enabled(20),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryBackend {
    Memory,
    File,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    pub backend: HistoryBackend,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, then `appsettings.<environment>.toml` when
    /// present, then `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let generation = GenerationSettings::default();
        let extraction = ExtractionSettings::default();

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.max_upload_size_mb", 25_i64)?
            .set_default("azure_openai.endpoint", DEFAULT_ENDPOINT)?
            .set_default("azure_openai.api_key", "")?
            .set_default("azure_openai.deployment_name", DEFAULT_DEPLOYMENT)?
            .set_default("azure_openai.api_version", DEFAULT_API_VERSION)?
            .set_default("generation.max_tokens", i64::from(generation.max_tokens))?
            .set_default("generation.temperature", f64::from(generation.temperature))?
            .set_default("generation.top_p", f64::from(generation.top_p))?
            .set_default(
                "generation.frequency_penalty",
                f64::from(generation.frequency_penalty),
            )?
            .set_default(
                "generation.presence_penalty",
                f64::from(generation.presence_penalty),
            )?
            .set_default("history.backend", "file")?
            .set_default("history.path", "data/summary-history.json")?
            .set_default("logging.level", "info,precis=debug,tower_http=debug")?
            .set_default("logging.enable_json", environment == Environment::Prod)?;

        for (name, format) in [
            ("text", &extraction.text),
            ("pdf", &extraction.pdf),
            ("word", &extraction.word),
            ("spreadsheet", &extraction.spreadsheet),
            ("image", &extraction.image),
        ] {
            builder = builder
                .set_default(format!("extraction.{name}.enabled"), format.enabled)?
                .set_default(
                    format!("extraction.{name}.max_file_size_mb"),
                    format.max_file_size_mb as i64,
                )?;
        }

        builder
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                ::config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
