//! HTTP routes

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use domain::RESULTS_URL_PREFIX;
use tower_http::services::ServeDir;

use crate::{
    handlers, middleware::propagate_request_id, openapi::create_openapi_routes, state::AppState,
};

/// Create the application router
///
/// Synthesized artifacts are served from the results directory under
/// `/results`. CORS and request tracing are added by the binary.
pub fn create_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.server.max_upload_bytes);
    let results = ServeDir::new(&state.config.storage.results_dir);

    Router::new()
        // Health endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Pipelines
        .route(
            "/api/summarize",
            post(handlers::summarize::summarize).layer(upload_limit),
        )
        .route("/api/generate-audio", post(handlers::audio::generate_audio))
        // Catalog
        .route("/api/voices", get(handlers::catalog::list_voices))
        .route("/api/languages", get(handlers::catalog::list_languages))
        .nest_service(RESULTS_URL_PREFIX, results)
        .merge(create_openapi_routes())
        .layer(middleware::from_fn(propagate_request_id))
        .with_state(state)
}
