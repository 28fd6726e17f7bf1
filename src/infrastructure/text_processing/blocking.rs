use std::time::Duration;

use crate::application::ports::FileLoaderError;

pub(super) const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a CPU-bound parser on the blocking pool, bounded by
/// [`EXTRACTION_TIMEOUT`]. A panic inside the parser is reported as an
/// extraction failure.
///
/// The timeout only stops the request from waiting. Blocking tasks cannot be
/// cancelled, so a parser that never returns keeps its blocking-pool thread
/// until it finishes.
pub(super) async fn run_parser<T, F>(format: &'static str, parse: F) -> Result<T, FileLoaderError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, FileLoaderError> + Send + std::panic::UnwindSafe + 'static,
{
    tokio::time::timeout(
        EXTRACTION_TIMEOUT,
        tokio::task::spawn_blocking(move || {
            std::panic::catch_unwind(parse).unwrap_or_else(|_| {
                Err(FileLoaderError::ExtractionFailed(format!(
                    "{format} parser panicked on malformed input"
                )))
            })
        }),
    )
    .await
    .map_err(|_| FileLoaderError::ExtractionFailed(format!("{format} extraction timed out")))?
    .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
}
