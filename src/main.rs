use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use precis::application::ports::HistoryRepository;
use precis::application::services::{EndpointConfigStore, SummarizationService};
use precis::infrastructure::llm::AzureOpenAiSummarizer;
use precis::infrastructure::observability::{TracingConfig, init_tracing};
use precis::infrastructure::persistence::{InMemoryHistoryRepository, JsonFileHistoryRepository};
use precis::infrastructure::text_processing::ExtractorFactory;
use precis::presentation::config::HistoryBackend;
use precis::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let file_loader = Arc::new(ExtractorFactory::create(&settings.extraction));
    let summarizer = Arc::new(AzureOpenAiSummarizer::new(settings.generation.clone()));

    let history: Arc<dyn HistoryRepository> = match settings.history.backend {
        HistoryBackend::Memory => Arc::new(InMemoryHistoryRepository::new()),
        HistoryBackend::File => {
            let repository = JsonFileHistoryRepository::open(&settings.history.path)
                .await
                .with_context(|| {
                    format!(
                        "Failed to open summary history at {}",
                        settings.history.path.display()
                    )
                })?;
            Arc::new(repository)
        }
    };

    let config_store = Arc::new(EndpointConfigStore::new(settings.azure_openai.clone()));
    if let Err(e) = settings.azure_openai.validate() {
        tracing::warn!(error = %e, "Azure OpenAI is not configured; summaries will be rejected until it is");
    }

    let summarization_service = Arc::new(SummarizationService::new(
        file_loader,
        summarizer,
        history,
        Arc::clone(&config_store),
    ));

    let state = AppState {
        summarization_service,
        config_store,
        max_upload_bytes: settings.server.max_upload_size_mb * 1024 * 1024,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
