//! `POST /api/summarize`

use std::path::Path;

use application::{ApplicationError, SummarizeRequest};
use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use domain::{DEFAULT_LANGUAGE, DocumentSummary, LanguageCode, SummaryMode, SummaryStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

const NO_FILE_PART: &str = "No file part";
const NO_SELECTED_FILE: &str = "No selected file";

/// Multipart form accepted by the summarize endpoint
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct SummarizeForm {
    /// Document to summarize (pdf, txt, md, html, htm, csv, docx, pptx)
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
    /// `quick`, `standard` or `deep`
    #[schema(example = "standard")]
    mode: Option<String>,
    /// Target language of the translated summary
    #[schema(example = "en")]
    language: Option<String>,
    /// `standard` or `gemini`
    #[schema(example = "standard")]
    model_type: Option<String>,
}

/// Stage durations in seconds, rounded to two decimals
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_time: f64,
    pub extraction_time: f64,
    pub summarization_time: f64,
    pub translation_time: f64,
}

/// Summaries of one uploaded document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub original_summary: String,
    pub translated_summary: String,
    pub metrics: SummaryMetrics,
}

impl From<DocumentSummary> for SummarizeResponse {
    fn from(summary: DocumentSummary) -> Self {
        let timings = summary.timings;
        Self {
            original_summary: summary.original,
            translated_summary: summary.translated,
            metrics: SummaryMetrics {
                total_time: timings.total_secs(),
                extraction_time: timings.extraction_secs(),
                summarization_time: timings.summarization_secs(),
                translation_time: timings.translation_secs(),
            },
        }
    }
}

#[derive(Default)]
struct UploadForm {
    file: Option<(String, Vec<u8>)>,
    mode: Option<String>,
    language: Option<String>,
    model_type: Option<String>,
}

impl UploadForm {
    async fn read(multipart: &mut Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let content = field.bytes().await.map_err(multipart_error)?;
                    form.file = Some((file_name, content.to_vec()));
                },
                "mode" => form.mode = Some(field.text().await.map_err(multipart_error)?),
                "language" => form.language = Some(field.text().await.map_err(multipart_error)?),
                "model_type" => {
                    form.model_type = Some(field.text().await.map_err(multipart_error)?);
                },
                other => debug!(field = other, "Ignoring unknown form field"),
            }
        }
        Ok(form)
    }

    fn into_request(self) -> Result<SummarizeRequest, ApiError> {
        let (file_name, content) = self
            .file
            .ok_or_else(|| ApiError::BadRequest(NO_FILE_PART.to_string()))?;
        if file_name.is_empty() {
            return Err(ApiError::BadRequest(NO_SELECTED_FILE.to_string()));
        }

        let extension = Path::new(&file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_string();
        let mode = SummaryMode::parse(self.mode.as_deref().unwrap_or("standard"));
        let language = LanguageCode::new(
            non_blank(self.language).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        )
        .map_err(ApplicationError::from)?;
        let strategy = self
            .model_type
            .as_deref()
            .unwrap_or_default()
            .parse::<SummaryStrategy>()
            .map_err(ApplicationError::from)?;

        Ok(SummarizeRequest {
            content,
            extension,
            mode,
            language,
            strategy,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::BadRequest(err.body_text())
    }
}

/// Summarize an uploaded document and translate the summary
#[utoipa::path(
    post,
    path = "/api/summarize",
    tag = "summarize",
    request_body(content = SummarizeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Document summarized", body = SummarizeResponse),
        (status = 400, description = "Missing file, unsupported format or invalid field", body = crate::error::ErrorResponse),
        (status = 413, description = "Upload too large", body = crate::error::ErrorResponse),
        (status = 429, description = "Backend rate limited", body = crate::error::ErrorResponse),
        (status = 502, description = "Summarization or translation backend failed", body = crate::error::ErrorResponse),
        (status = 504, description = "Backend timed out", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, multipart))]
pub async fn summarize(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    // Not a multipart body at all, so there is no file part either
    let mut multipart = multipart.map_err(|rejection| {
        debug!(error = %rejection, "Rejected non-multipart body");
        ApiError::BadRequest(NO_FILE_PART.to_string())
    })?;

    let request = UploadForm::read(&mut multipart).await?.into_request()?;
    let summary = state.summary_service.summarize(request).await?;

    Ok(Json(summary.into()))
}
