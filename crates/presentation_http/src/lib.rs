//! HTTP presentation layer - REST API with Axum
//!
//! Exposes the summarize and generate-audio pipelines, the voice and
//! language catalogs, health probes and the synthesized artifacts.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
