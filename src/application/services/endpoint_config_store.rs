use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::{EndpointConfig, EndpointConfigUpdate};

/// Owner of the current endpoint configuration.
///
/// Callers never hold a reference into the store; they take a snapshot and
/// pass it explicitly to the summarizer for the duration of one request.
pub struct EndpointConfigStore {
    current: RwLock<EndpointConfig>,
}

/// What the API reports about the configuration. The key itself is never
/// included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigStatus {
    pub configured: bool,
    pub endpoint: String,
    pub deployment_name: String,
    pub api_version: String,
    pub api_key_set: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

impl EndpointConfigStore {
    pub fn new(initial: EndpointConfig) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub async fn snapshot(&self) -> EndpointConfig {
        self.current.read().await.clone()
    }

    pub async fn update(&self, update: EndpointConfigUpdate) -> ConfigStatus {
        let mut current = self.current.write().await;
        current.apply(update);
        let status = status_of(&current);

        if status.configured {
            tracing::info!(
                endpoint = %status.endpoint,
                deployment = %status.deployment_name,
                "Endpoint configuration updated"
            );
        } else {
            tracing::warn!(
                problem = status.problem.as_deref().unwrap_or_default(),
                "Endpoint configuration saved but incomplete"
            );
        }

        status
    }

    pub async fn status(&self) -> ConfigStatus {
        status_of(&*self.current.read().await)
    }
}

fn status_of(config: &EndpointConfig) -> ConfigStatus {
    let problem = config.validate().err().map(|e| e.to_string());
    ConfigStatus {
        configured: problem.is_none(),
        endpoint: config.endpoint.clone(),
        deployment_name: config.deployment_name.clone(),
        api_version: config.api_version.clone(),
        api_key_set: !config.api_key.trim().is_empty(),
        problem,
    }
}
