use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::application::ports::{FileLoader, Summarizer};
use crate::domain::EndpointConfigUpdate;
use crate::presentation::state::AppState;

pub async fn get_config_handler<F, S>(State(state): State<AppState<F, S>>) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    Json(state.config_store.status().await)
}

/// Applies a partial update. An incomplete configuration is still saved; the
/// response says whether summarization is now possible.
#[tracing::instrument(skip(state, update))]
pub async fn update_config_handler<F, S>(
    State(state): State<AppState<F, S>>,
    Json(update): Json<EndpointConfigUpdate>,
) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    Json(state.config_store.update(update).await)
}
