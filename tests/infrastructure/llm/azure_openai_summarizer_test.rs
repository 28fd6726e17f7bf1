use precis::application::ports::{Summarizer, SummarizerError};
use precis::domain::{ConfigurationError, EndpointConfig};
use precis::infrastructure::llm::{AzureOpenAiSummarizer, SUMMARY_CONFIDENCE, SYSTEM_PROMPT};
use precis::presentation::config::GenerationSettings;

use crate::helpers::{MockAzureServer, TEST_API_KEY, completion_body};

#[tokio::test]
async fn given_successful_completion_when_summarizing_then_returns_trimmed_content() {
    let server = MockAzureServer::completing_with("  The report covers Q3 revenue.\n").await;
    let summarizer = AzureOpenAiSummarizer::default();

    let summary = summarizer
        .summarize("Revenue grew 12% in Q3.", &server.config())
        .await
        .unwrap();

    assert_eq!(summary.text, "The report covers Q3 revenue.");
    assert_eq!(summary.confidence, SUMMARY_CONFIDENCE);
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn given_request_when_summarizing_then_sends_key_prompt_and_generation_parameters() {
    let server = MockAzureServer::completing_with("ok").await;
    let summarizer = AzureOpenAiSummarizer::new(GenerationSettings {
        max_tokens: 256,
        ..GenerationSettings::default()
    });

    summarizer
        .summarize("Payload text", &server.config())
        .await
        .unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.api_key.as_deref(), Some(TEST_API_KEY));
    assert_eq!(
        request.query.as_deref(),
        Some("api-version=2024-02-15-preview")
    );
    assert_eq!(request.body["messages"][0]["role"], "system");
    assert_eq!(request.body["messages"][0]["content"], SYSTEM_PROMPT);
    assert_eq!(request.body["messages"][1]["role"], "user");
    assert_eq!(request.body["messages"][1]["content"], "Payload text");
    assert_eq!(request.body["max_tokens"], 256);
    assert_eq!(request.body["top_p"], 1.0);
    assert_eq!(request.body["presence_penalty"], 0.0);
}

#[tokio::test]
async fn given_non_success_status_when_summarizing_then_upstream_error_keeps_status_and_body() {
    let server = MockAzureServer::start(401, r#"{"error":{"code":"Unauthorized"}}"#).await;
    let summarizer = AzureOpenAiSummarizer::default();

    let result = summarizer.summarize("text", &server.config()).await;

    match result {
        Err(SummarizerError::Upstream { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Unauthorized"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_no_choices_when_summarizing_then_empty_response() {
    let server = MockAzureServer::start(200, r#"{"choices":[]}"#).await;
    let summarizer = AzureOpenAiSummarizer::default();

    let result = summarizer.summarize("text", &server.config()).await;

    assert!(matches!(result, Err(SummarizerError::EmptyResponse)));
}

#[tokio::test]
async fn given_blank_content_when_summarizing_then_empty_response() {
    let server = MockAzureServer::start(200, completion_body("   \n")).await;
    let summarizer = AzureOpenAiSummarizer::default();

    let result = summarizer.summarize("text", &server.config()).await;

    assert!(matches!(result, Err(SummarizerError::EmptyResponse)));
}

#[tokio::test]
async fn given_undecodable_body_when_summarizing_then_transport_error() {
    let server = MockAzureServer::start(200, "<html>gateway</html>").await;
    let summarizer = AzureOpenAiSummarizer::default();

    let result = summarizer.summarize("text", &server.config()).await;

    assert!(matches!(result, Err(SummarizerError::Transport(_))));
}

#[tokio::test]
async fn given_missing_api_key_when_summarizing_then_configuration_error_without_network_call() {
    let server = MockAzureServer::completing_with("unused").await;
    let summarizer = AzureOpenAiSummarizer::default();
    let config = EndpointConfig {
        api_key: String::new(),
        ..server.config()
    };

    let result = summarizer.summarize("text", &config).await;

    assert!(matches!(
        result,
        Err(SummarizerError::Configuration(
            ConfigurationError::MissingApiKey
        ))
    ));
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn given_unreachable_endpoint_when_summarizing_then_transport_error() {
    let closed_port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = EndpointConfig {
        endpoint: format!("http://127.0.0.1:{closed_port}"),
        api_key: TEST_API_KEY.to_string(),
        deployment_name: "test-deployment".to_string(),
        api_version: "2024-02-15-preview".to_string(),
    };

    let result = AzureOpenAiSummarizer::default()
        .summarize("text", &config)
        .await;

    assert!(matches!(result, Err(SummarizerError::Transport(_))));
}
