use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, Summarizer};
use crate::application::services::SummaryOutcome;
use crate::domain::{ExtractionOutcome, SummaryId, SummaryKind, UploadedDocument};
use crate::presentation::state::AppState;

use super::error::error_response;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct SummaryResponse {
    pub id: String,
    pub kind: SummaryKind,
    pub filename: String,
    pub summary: String,
    pub confidence: f32,
    pub processing_time_ms: u64,
    pub size_label: String,
    pub created_at: DateTime<Utc>,
    /// Set when the model summarized a placeholder instead of real content.
    pub degraded: bool,
}

impl From<SummaryOutcome> for SummaryResponse {
    fn from(outcome: SummaryOutcome) -> Self {
        Self {
            id: outcome.record.id.to_string(),
            kind: outcome.record.kind,
            filename: outcome.record.filename,
            summary: outcome.record.summary,
            confidence: outcome.summary.confidence,
            processing_time_ms: outcome.summary.processing_time.as_millis() as u64,
            size_label: outcome.record.size_label,
            created_at: outcome.record.created_at,
            degraded: outcome.extraction == ExtractionOutcome::Placeholder,
        }
    }
}

#[derive(Deserialize)]
pub struct SummarizeTextRequest {
    pub text: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_document_handler<F, S>(
    State(state): State<AppState<F, S>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(FILE_FIELD) || field.file_name().is_some() => {
                break field;
            }
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Summarize request with no file");
                return error_response(StatusCode::BAD_REQUEST, "Please select a file to summarize");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read multipart: {e}"));
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let mime_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(e.status(), format!("Failed to read file: {e}"));
        }
    };

    let document = UploadedDocument::new(filename, mime_type, data.to_vec());
    tracing::debug!(
        filename = %document.filename(),
        mime = %document.mime_type(),
        content_type = ?document.content_type(),
        bytes = document.size_bytes(),
        "File received"
    );

    match state
        .summarization_service
        .summarize_document(document)
        .await
    {
        Ok(outcome) => (StatusCode::OK, Json(SummaryResponse::from(outcome))).into_response(),
        Err(e) => e.into_response(),
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn summarize_text_handler<F, S>(
    State(state): State<AppState<F, S>>,
    Json(request): Json<SummarizeTextRequest>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    match state
        .summarization_service
        .summarize_text(&request.text)
        .await
    {
        Ok(outcome) => (StatusCode::OK, Json(SummaryResponse::from(outcome))).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_history_handler<F, S>(State(state): State<AppState<F, S>>) -> Response
where
    F: FileLoader + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    match state.summarization_service.history().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_summary_handler<F, S>(
    State(state): State<AppState<F, S>>,
    Path(id): Path<String>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    let Ok(id) = id.parse::<SummaryId>() else {
        return error_response(StatusCode::BAD_REQUEST, format!("Invalid summary id: {id}"));
    };

    match state.summarization_service.summary(id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_history_handler<F, S>(
    State(state): State<AppState<F, S>>,
    Path(id): Path<String>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    let Ok(id) = id.parse::<SummaryId>() else {
        return error_response(StatusCode::BAD_REQUEST, format!("Invalid summary id: {id}"));
    };

    match state.summarization_service.delete_history(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
