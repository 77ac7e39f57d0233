//! Typed client for the Doc2Podcast HTTP API

use std::{path::Path, time::Duration};

use reqwest::{
    Client, Response, StatusCode,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

/// Error type for API calls
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    /// The server answered with an error body
    #[error("HTTP {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Options of one summarize call
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    pub mode: String,
    pub language: String,
    pub model_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_time: f64,
    pub extraction_time: f64,
    pub summarization_time: f64,
    pub translation_time: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub original_summary: String,
    pub translated_summary: String,
    pub metrics: Metrics,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioRequest<'a> {
    translated_summary: &'a str,
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AudioResponse {
    audio_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client bound to one server
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL of a server path
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Upload a document and return its summaries
    #[instrument(skip(self, options), fields(mode = %options.mode, language = %options.language))]
    pub async fn summarize(
        &self,
        file: &Path,
        options: &SummarizeOptions,
    ) -> Result<SummaryResult, ClientError> {
        let content = tokio::fs::read(file)
            .await
            .map_err(|source| ClientError::File {
                path: file.display().to_string(),
                source,
            })?;
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(file = %file_name, bytes = content.len(), "Uploading document");

        let form = Form::new()
            .part("file", Part::bytes(content).file_name(file_name))
            .text("mode", options.mode.clone())
            .text("language", options.language.clone())
            .text("model_type", options.model_type.clone());

        let response = self
            .client
            .post(self.url("/api/summarize"))
            .multipart(form)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Synthesize `text` and return the artifact URL path
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn generate_audio(
        &self,
        text: &str,
        language: &str,
        voice: Option<&str>,
    ) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url("/api/generate-audio"))
            .json(&AudioRequest {
                translated_summary: text,
                language,
                voice,
            })
            .send()
            .await?;
        let body: AudioResponse = Self::parse(response).await?;
        Ok(body.audio_url)
    }

    /// Fetch an artifact by the URL path returned from [`Self::generate_audio`]
    pub async fn download(&self, audio_url: &str) -> Result<Vec<u8>, ClientError> {
        let response = self.client.get(self.url(audio_url)).send().await?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// GET a JSON endpoint
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        Ok(Self::check(response).await?.json::<T>().await?)
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        Err(ClientError::Api { status, message })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    fn options() -> SummarizeOptions {
        SummarizeOptions {
            mode: "quick".to_string(),
            language: "fr".to_string(),
            model_type: "standard".to_string(),
        }
    }

    #[test]
    fn url_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.url("/health"), "http://localhost:5000/health");
    }

    #[tokio::test]
    async fn summarize_uploads_multipart_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/summarize"))
            .and(body_string_contains("filename=\"notes.txt\""))
            .and(body_string_contains("name=\"model_type\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "originalSummary": "Short.",
                "translatedSummary": "Court.",
                "metrics": {
                    "totalTime": 1.5,
                    "extractionTime": 0.1,
                    "summarizationTime": 1.2,
                    "translationTime": 0.2
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "Some notes.").unwrap();

        let result = client(&server).summarize(&file, &options()).await.unwrap();

        assert_eq!(result.original_summary, "Short.");
        assert_eq!(result.translated_summary, "Court.");
        assert!((result.metrics.summarization_time - 1.2).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn missing_file_is_reported_before_sending() {
        let server = MockServer::start().await;

        let err = client(&server)
            .summarize(Path::new("/nonexistent/doc.pdf"), &options())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::File { .. }));
    }

    #[tokio::test]
    async fn api_error_message_is_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate-audio"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"error": "Missing text or language", "code": "bad_request"})),
            )
            .mount(&server)
            .await;

        let err = client(&server)
            .generate_audio("", "fr", None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Api { status, ref message }
                if status == StatusCode::BAD_REQUEST && message == "Missing text or language"
        ));
    }

    #[tokio::test]
    async fn generate_audio_then_download() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate-audio"))
            .and(body_json(json!({
                "translatedSummary": "Bonjour",
                "language": "fr",
                "voice": "Kore"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"audioUrl": "/results/summary_abc.wav"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/results/summary_abc.wav"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"RIFF".to_vec()))
            .mount(&server)
            .await;

        let client = client(&server);
        let url = client
            .generate_audio("Bonjour", "fr", Some("Kore"))
            .await
            .unwrap();
        let bytes = client.download(&url).await.unwrap();

        assert_eq!(url, "/results/summary_abc.wav");
        assert_eq!(bytes, b"RIFF");
    }

    #[tokio::test]
    async fn non_json_error_body_is_kept_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ready"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let err = client(&server).get_json("/ready").await.unwrap_err();

        assert!(err.to_string().contains("unavailable"));
    }
}
