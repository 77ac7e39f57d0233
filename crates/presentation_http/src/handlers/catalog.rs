//! Voices and languages offered to clients

use axum::Json;
use domain::{DEFAULT_LANGUAGE, OFFERED_LANGUAGES, STANDARD_VOICE, VoiceSelection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Available voices
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VoicesResponse {
    /// `standard` followed by the named voices
    #[schema(example = json!(["standard", "Puck", "Charon", "Kore", "Fenrir", "Aoede"]))]
    pub voices: Vec<String>,
    #[schema(example = "standard")]
    pub default: String,
}

/// One selectable target language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LanguageEntry {
    #[schema(example = "fr")]
    pub code: String,
    #[schema(example = "French")]
    pub name: String,
}

/// Available target languages
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageEntry>,
    #[schema(example = "en")]
    pub default: String,
}

/// List the voices accepted by `/api/generate-audio`
#[utoipa::path(
    get,
    path = "/api/voices",
    tag = "catalog",
    responses(
        (status = 200, description = "Available voices", body = VoicesResponse)
    )
)]
pub async fn list_voices() -> Json<VoicesResponse> {
    Json(VoicesResponse {
        voices: VoiceSelection::catalog()
            .into_iter()
            .map(String::from)
            .collect(),
        default: STANDARD_VOICE.to_string(),
    })
}

/// List the target languages offered for summaries and audio
#[utoipa::path(
    get,
    path = "/api/languages",
    tag = "catalog",
    responses(
        (status = 200, description = "Available languages", body = LanguagesResponse)
    )
)]
pub async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: OFFERED_LANGUAGES
            .iter()
            .map(|code| LanguageEntry {
                code: (*code).to_string(),
                name: display_name(code).to_string(),
            })
            .collect(),
        default: DEFAULT_LANGUAGE.to_string(),
    })
}

fn display_name(code: &str) -> &'static str {
    match code {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "hi" => "Hindi",
        _ => "Other",
    }
}
