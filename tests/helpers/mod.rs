use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::RawQuery;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use precis::domain::EndpointConfig;

pub const TEST_DEPLOYMENT: &str = "test-deployment";
pub const TEST_API_KEY: &str = "test-key-0123456789";
pub const TEST_API_VERSION: &str = "2024-02-15-preview";

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub api_key: Option<String>,
    pub query: Option<String>,
    pub body: Value,
}

/// Chat-completion endpoint on an ephemeral port that answers every request
/// with the same status and body and counts what it receives.
pub struct MockAzureServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockAzureServer {
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handler_hits = Arc::clone(&hits);
        let handler_requests = Arc::clone(&requests);
        let app = Router::new().route(
            &format!("/openai/deployments/{TEST_DEPLOYMENT}/chat/completions"),
            post(
                move |headers: HeaderMap, RawQuery(query): RawQuery, Json(payload): Json<Value>| {
                    let hits = Arc::clone(&handler_hits);
                    let requests = Arc::clone(&handler_requests);
                    let body = body.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        requests.lock().unwrap().push(CapturedRequest {
                            api_key: headers
                                .get("api-key")
                                .and_then(|v| v.to_str().ok())
                                .map(String::from),
                            query,
                            body: payload,
                        });
                        (
                            StatusCode::from_u16(status).unwrap(),
                            [(CONTENT_TYPE, "application/json")],
                            body,
                        )
                    }
                },
            ),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .ok();
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
            requests,
            shutdown: Some(shutdown_tx),
        }
    }

    pub async fn completing_with(content: &str) -> Self {
        Self::start(200, completion_body(content)).await
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> EndpointConfig {
        EndpointConfig {
            endpoint: self.base_url.clone(),
            api_key: TEST_API_KEY.to_string(),
            deployment_name: TEST_DEPLOYMENT.to_string(),
            api_version: TEST_API_VERSION.to_string(),
        }
    }
}

impl Drop for MockAzureServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
    }
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
    .to_string()
}
