use std::fmt;

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "your-endpoint.openai.azure.com";
pub const DEFAULT_DEPLOYMENT: &str = "gpt-35-turbo";
pub const DEFAULT_API_VERSION: &str = "2024-02-15-preview";

const PLACEHOLDER_ENDPOINT_MARKER: &str = "your-endpoint";
const PLACEHOLDER_DEPLOYMENT: &str = "your-deployment-name";
const MIN_API_KEY_CHARS: usize = 11;

/// Connection details for an Azure OpenAI chat-completion deployment.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    pub deployment_name: String,
    pub api_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("API key is not set")]
    MissingApiKey,
    #[error("API key is too short to be a real key")]
    InvalidApiKey,
    #[error("endpoint is not set or still holds the placeholder value")]
    PlaceholderEndpoint,
    #[error("deployment name is not set or still holds the placeholder value")]
    PlaceholderDeployment,
}

/// Partial update of an [`EndpointConfig`]. Absent or blank fields keep
/// their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointConfigUpdate {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub deployment_name: Option<String>,
    pub api_version: Option<String>,
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigurationError::MissingApiKey);
        }
        if api_key.chars().count() < MIN_API_KEY_CHARS {
            return Err(ConfigurationError::InvalidApiKey);
        }

        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() || endpoint.contains(PLACEHOLDER_ENDPOINT_MARKER) {
            return Err(ConfigurationError::PlaceholderEndpoint);
        }

        let deployment = self.deployment_name.trim();
        if deployment.is_empty() || deployment == PLACEHOLDER_DEPLOYMENT {
            return Err(ConfigurationError::PlaceholderDeployment);
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn apply(&mut self, update: EndpointConfigUpdate) {
        fn assign(target: &mut String, value: Option<String>) {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                *target = value.trim().to_string();
            }
        }

        assign(&mut self.endpoint, update.endpoint);
        assign(&mut self.api_key, update.api_key);
        assign(&mut self.deployment_name, update.deployment_name);
        assign(&mut self.api_version, update.api_version);
    }

    /// Endpoint with a scheme and without trailing slashes. Bare host names
    /// are assumed to be HTTPS.
    pub fn base_url(&self) -> String {
        let endpoint = self.endpoint.trim().trim_end_matches('/');
        if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
            endpoint.to_string()
        } else {
            format!("https://{endpoint}")
        }
    }

    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.base_url(),
            self.deployment_name.trim(),
            self.api_version.trim(),
        )
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            deployment_name: DEFAULT_DEPLOYMENT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "[REDACTED]" })
            .field("deployment_name", &self.deployment_name)
            .field("api_version", &self.api_version)
            .finish()
    }
}
