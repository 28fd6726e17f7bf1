use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::SummarizerError;
use crate::application::services::SummarizationError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            filename: None,
            upstream_status: None,
        }
    }
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(error))).into_response()
}

impl IntoResponse for SummarizationError {
    fn into_response(self) -> Response {
        match self {
            e @ (SummarizationError::Configuration(_)
            | SummarizationError::Summarizer(SummarizerError::Configuration(_))) => {
                tracing::warn!(error = %e, "Summarization requested without valid configuration");
                error_response(
                    StatusCode::PRECONDITION_FAILED,
                    format!(
                        "{e}. Configure the Azure OpenAI endpoint, API key and deployment name via PUT /api/v1/config."
                    ),
                )
            }
            SummarizationError::EmptyInput => {
                error_response(StatusCode::BAD_REQUEST, "Please provide text to summarize")
            }
            SummarizationError::Extraction(e) => {
                tracing::warn!(error = %e, "Extraction failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse {
                        error: e.to_string(),
                        filename: Some(e.filename),
                        upstream_status: None,
                    }),
                )
                    .into_response()
            }
            SummarizationError::Summarizer(SummarizerError::Upstream { status, body }) => {
                tracing::error!(status, body = %body, "Upstream summarization failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorResponse {
                        error: format!("Azure OpenAI API error: {status} - {body}"),
                        filename: None,
                        upstream_status: Some(status),
                    }),
                )
                    .into_response()
            }
            SummarizationError::Summarizer(e) => {
                tracing::error!(error = %e, "Summarization failed");
                error_response(StatusCode::BAD_GATEWAY, e.to_string())
            }
            SummarizationError::NotFound(id) => {
                error_response(StatusCode::NOT_FOUND, format!("Summary {id} not found"))
            }
            SummarizationError::History(e) => {
                tracing::error!(error = %e, "Summary history unavailable");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("history: {e}"))
            }
        }
    }
}
