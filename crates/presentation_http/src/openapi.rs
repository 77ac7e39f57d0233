//! OpenAPI documentation
//!
//! Serves the document at `/api-docs/openapi.json` and Swagger UI at
//! `/swagger-ui`.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation for Doc2Podcast
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Doc2Podcast API",
        version = "0.1.0",
        description = "Summarize documents, translate the summary and turn it into speech",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Liveness and readiness"),
        (name = "summarize", description = "Document summarization and translation"),
        (name = "audio", description = "Summary text-to-speech"),
        (name = "catalog", description = "Voices and languages offered to clients")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::summarize::summarize,
        handlers::audio::generate_audio,
        handlers::catalog::list_voices,
        handlers::catalog::list_languages,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::summarize::SummarizeForm,
            handlers::summarize::SummarizeResponse,
            handlers::summarize::SummaryMetrics,
            handlers::audio::GenerateAudioBody,
            handlers::audio::GenerateAudioResponse,
            handlers::catalog::VoicesResponse,
            handlers::catalog::LanguagesResponse,
            handlers::catalog::LanguageEntry,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document and Swagger UI
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}
