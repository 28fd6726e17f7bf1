use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError, Summary};
use crate::domain::EndpointConfig;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::GenerationSettings;

pub const SYSTEM_PROMPT: &str = "You are a document summarization assistant. Provide a comprehensive summary of the content supplied by the user. Extract the key points, main ideas, and important details. Format your response in clear, readable paragraphs.";

/// Azure OpenAI does not return a confidence score.
pub const SUMMARY_CONFIDENCE: f32 = 0.95;

/// Summarizer backed by an Azure OpenAI chat-completion deployment.
///
/// The endpoint, key and deployment come from the [`EndpointConfig`] passed
/// to each call; only generation parameters are fixed at construction.
pub struct AzureOpenAiSummarizer {
    client: reqwest::Client,
    generation: GenerationSettings,
}

impl AzureOpenAiSummarizer {
    pub fn new(generation: GenerationSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            generation,
        }
    }

    fn request_body<'a>(&self, content: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            messages: [
                RequestMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                RequestMessage {
                    role: "user",
                    content,
                },
            ],
            max_tokens: self.generation.max_tokens,
            temperature: self.generation.temperature,
            top_p: self.generation.top_p,
            frequency_penalty: self.generation.frequency_penalty,
            presence_penalty: self.generation.presence_penalty,
        }
    }
}

impl Default for AzureOpenAiSummarizer {
    fn default() -> Self {
        Self::new(GenerationSettings::default())
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    messages: [RequestMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[async_trait]
impl Summarizer for AzureOpenAiSummarizer {
    #[tracing::instrument(
        skip(self, content, config),
        fields(deployment = %config.deployment_name, chars = content.len())
    )]
    async fn summarize(
        &self,
        content: &str,
        config: &EndpointConfig,
    ) -> Result<Summary, SummarizerError> {
        config.validate()?;

        let url = config.chat_completions_url();
        let started = Instant::now();

        tracing::debug!(
            endpoint = %url,
            payload = %sanitize_prompt(content),
            "Sending content to Azure OpenAI"
        );

        let response = self
            .client
            .post(&url)
            .header("api-key", &config.api_key)
            .json(&self.request_body(content))
            .send()
            .await
            .map_err(|e| SummarizerError::Transport(format!("request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::warn!(status = status.as_u16(), body = %body, "Azure OpenAI rejected request");
            return Err(SummarizerError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| SummarizerError::Transport(format!("parse response: {e}")))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(SummarizerError::EmptyResponse)?;

        let processing_time = started.elapsed();
        tracing::info!(
            chars = text.len(),
            processing_ms = processing_time.as_millis() as u64,
            "Azure OpenAI summary received"
        );

        Ok(Summary {
            text,
            confidence: SUMMARY_CONFIDENCE,
            processing_time,
        })
    }
}
