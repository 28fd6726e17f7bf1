use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, Summarizer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    delete_history_handler, get_config_handler, get_summary_handler, health_handler,
    list_history_handler,
    summarize_document_handler, summarize_text_handler, update_config_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, S>(state: AppState<F, S>) -> Router
where
    F: FileLoader + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/summaries/document",
            post(summarize_document_handler::<F, S>),
        )
        .route("/api/v1/summaries/text", post(summarize_text_handler::<F, S>))
        .route("/api/v1/summaries", get(list_history_handler::<F, S>))
        .route(
            "/api/v1/summaries/{id}",
            get(get_summary_handler::<F, S>).delete(delete_history_handler::<F, S>),
        )
        .route(
            "/api/v1/config",
            get(get_config_handler::<F, S>).put(update_config_handler::<F, S>),
        )
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
