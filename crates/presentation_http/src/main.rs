//! Doc2Podcast HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use ai_core::{GeminiClient, GeminiSummarizationEngine, LocalSummarizationEngine};
use anyhow::Context;
use application::{AudioService, DocumentSummaryService, FileStorePort, Summarizers};
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AppConfig, DEFAULT_LOG_FILTER, ExtractionAdapter, GEMINI_API_KEY_VAR, LocalFileStore,
    SpeechAdapter, SummarizerAdapter, TranslationAdapter, init_telemetry,
};
use presentation_http::{create_router, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();
    let log_format = loaded
        .as_ref()
        .map(|config| config.server.log_format)
        .unwrap_or_default();
    init_telemetry(log_format, DEFAULT_LOG_FILTER)?;

    info!("🎙️ Doc2Podcast v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        let mut config = AppConfig::default();
        config.resolve_gemini_key(std::env::var(GEMINI_API_KEY_VAR).ok());
        config
    });
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        uploads = %config.storage.uploads_dir.display(),
        results = %config.storage.results_dir.display(),
        local_model = %config.summarizer.local_model.model,
        gemini_key = config.gemini_api_key().is_some(),
        "Configuration loaded"
    );

    let state = build_state(config.clone()).await?;
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.allowed_origins));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs: http://{}/swagger-ui", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wire backends, adapters and services
async fn build_state(config: AppConfig) -> anyhow::Result<AppState> {
    let file_store = LocalFileStore::from_config(&config.storage);
    file_store
        .ensure_directories()
        .await
        .context("Failed to create storage directories")?;
    let file_store: Arc<dyn FileStorePort> = Arc::new(file_store);

    let gemini_key = config.gemini_api_key();

    let local_engine = LocalSummarizationEngine::new(config.summarizer.local_model.clone())
        .context("Failed to initialize local summarization model client")?;
    let gemini_client = Arc::new(GeminiClient::new(
        config.summarizer.gemini.clone(),
        gemini_key.clone(),
    ));
    let summarizers = Summarizers::new(
        Arc::new(SummarizerAdapter::new(Arc::new(local_engine))),
        Arc::new(SummarizerAdapter::new(Arc::new(
            GeminiSummarizationEngine::new(gemini_client),
        ))),
    );

    let translator = TranslationAdapter::with_config(config.translate.clone())
        .context("Failed to initialize translation client")?;
    let speech = ai_speech::build_speech_provider(&config.speech, gemini_key)
        .context("Failed to initialize speech backends")?;

    let summary_service = DocumentSummaryService::new(
        Arc::clone(&file_store),
        Arc::new(ExtractionAdapter::from_config(&config.extraction)),
        summarizers,
        Arc::new(translator),
    );
    let audio_service = AudioService::new(
        Arc::new(SpeechAdapter::new(speech)),
        Arc::clone(&file_store),
    );

    Ok(AppState {
        summary_service: Arc::new(summary_service),
        audio_service: Arc::new(audio_service),
        file_store,
        config: Arc::new(config),
    })
}

/// Any origin when none are configured, else exactly the configured list
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse()
                .inspect_err(|_| warn!(origin = %origin, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Resolve on Ctrl+C or SIGTERM
///
/// In-flight requests get `drain_timeout` to finish; the process exits once
/// the timer fires even if connections are still open.
async fn shutdown_signal(drain_timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        () = ctrl_c => "Ctrl+C",
        () = terminate => "SIGTERM",
    };
    info!("📥 Received {received}, draining connections for up to {drain_timeout:?}");

    tokio::spawn(async move {
        tokio::time::sleep(drain_timeout).await;
        warn!("Drain timeout elapsed, exiting");
        std::process::exit(0);
    });
}
