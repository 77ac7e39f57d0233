//! `POST /api/generate-audio`

use application::GenerateAudioRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// Text to speak and how to speak it
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioBody {
    #[schema(example = "Bonjour")]
    pub translated_summary: Option<String>,
    #[schema(example = "fr")]
    pub language: Option<String>,
    /// `standard` (default) or a named voice
    #[schema(example = "standard")]
    pub voice: Option<String>,
}

/// Location of the synthesized artifact
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioResponse {
    #[schema(example = "/results/summary_4f1c2a9e-0b7d-4c55-9a34-2e8f1d7c6b10.mp3")]
    pub audio_url: String,
}

impl From<GenerateAudioBody> for GenerateAudioRequest {
    fn from(body: GenerateAudioBody) -> Self {
        Self {
            text: body.translated_summary,
            language: body.language,
            voice: body.voice,
        }
    }
}

/// Synthesize a summary to an audio file
#[utoipa::path(
    post,
    path = "/api/generate-audio",
    tag = "audio",
    request_body = GenerateAudioBody,
    responses(
        (status = 200, description = "Audio generated", body = GenerateAudioResponse),
        (status = 400, description = "Missing text or language", body = crate::error::ErrorResponse),
        (status = 500, description = "Synthesis failed", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn generate_audio(
    State(state): State<AppState>,
    body: Result<Json<GenerateAudioBody>, JsonRejection>,
) -> Result<Json<GenerateAudioResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let artifact = state.audio_service.generate(body.into()).await?;

    Ok(Json(GenerateAudioResponse {
        audio_url: artifact.url(),
    }))
}
