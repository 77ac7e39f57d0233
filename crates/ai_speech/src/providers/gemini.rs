//! Gemini named-voice text-to-speech
//!
//! Calls `generateContent` with an audio response modality and a prebuilt
//! voice. The audio comes back base64-encoded inside the JSON response.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use domain::AudioFormat;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

use crate::config::GeminiTtsConfig;
use crate::converter::{is_raw_pcm, pcm_to_wav, sample_rate_from_mime};
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, SpeechRequest};

/// Environment variable holding the Gemini credential
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Vendor status string signalling quota exhaustion
const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

/// Named-voice TTS backend
///
/// The HTTP client is built on first use; a missing key fails the call, not
/// construction.
pub struct GeminiTtsProvider {
    config: GeminiTtsConfig,
    api_key: Option<SecretString>,
    http: OnceCell<Client>,
}

impl std::fmt::Debug for GeminiTtsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTtsProvider")
            .field("config", &self.config)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TtsRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    speech_config: SpeechSettings<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechSettings<'a> {
    voice_config: VoiceConfig<'a>,
    language_code: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoice<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoice<'a> {
    voice_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct TtsResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidatePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

impl GeminiTtsProvider {
    pub fn new(config: GeminiTtsConfig, api_key: Option<SecretString>) -> Self {
        Self {
            config,
            api_key: api_key.filter(|key| !key.expose_secret().trim().is_empty()),
            http: OnceCell::new(),
        }
    }

    async fn http(&self) -> Result<&Client, SpeechError> {
        self.http
            .get_or_try_init(|| async {
                Client::builder()
                    .timeout(Duration::from_millis(self.config.timeout_ms))
                    .build()
                    .map_err(|e| {
                        SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
                    })
            })
            .await
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Turn inline audio into a playable file
    fn decode_audio(&self, inline: InlineData) -> Result<AudioData, SpeechError> {
        let bytes = BASE64
            .decode(inline.data.as_bytes())
            .map_err(|e| SpeechError::AudioProcessing(format!("invalid base64 audio: {e}")))?;
        if bytes.is_empty() {
            return Err(SpeechError::InvalidResponse("empty audio payload".to_string()));
        }

        let mime = inline.mime_type.to_ascii_lowercase();
        if mime.is_empty() || is_raw_pcm(&mime) {
            let rate = sample_rate_from_mime(&mime).unwrap_or(self.config.sample_rate);
            let wav = pcm_to_wav(&bytes, rate, 1)?;
            return Ok(AudioData::new(wav, AudioFormat::Wav));
        }
        if mime.contains("mpeg") || mime.contains("mp3") {
            return Ok(AudioData::new(bytes, AudioFormat::Mp3));
        }
        if mime.contains("wav") {
            return Ok(AudioData::new(bytes, AudioFormat::Wav));
        }
        Err(SpeechError::InvalidResponse(format!(
            "unsupported audio type: {}",
            inline.mime_type
        )))
    }
}

fn classify_failure(status: StatusCode, body: &str) -> SpeechError {
    if status == StatusCode::TOO_MANY_REQUESTS || body.contains(RESOURCE_EXHAUSTED) {
        return SpeechError::RateLimited(format!("Gemini TTS returned {status}"));
    }
    warn!(status = %status, body = %body, "Gemini TTS request failed");
    SpeechError::RequestFailed(format!("HTTP {status}: {body}"))
}

#[async_trait]
impl TextToSpeech for GeminiTtsProvider {
    #[instrument(skip(self, request), fields(
        chars = request.text.len(),
        language = request.language,
        voice = request.voice.unwrap_or_default()
    ))]
    async fn synthesize(&self, request: SpeechRequest<'_>) -> Result<AudioData, SpeechError> {
        let voice = request
            .voice
            .ok_or_else(|| SpeechError::Configuration("named voice required".to_string()))?;
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(SpeechError::MissingApiKey(API_KEY_VAR))?;
        let client = self.http().await?;

        let body = TtsRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: request.text }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechSettings {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoice { voice_name: voice },
                    },
                    language_code: request.language,
                },
            },
        };

        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let parsed: TtsResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let inline = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().find_map(|part| part.inline_data))
            .ok_or_else(|| SpeechError::InvalidResponse("no audio in response".to_string()))?;

        let audio = self.decode_audio(inline)?;
        debug!(bytes = audio.size_bytes(), format = ?audio.format(), "Named-voice TTS complete");
        Ok(audio)
    }

    fn name(&self) -> &'static str {
        "gemini-tts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiTtsProvider {
        GeminiTtsProvider::new(GeminiTtsConfig::default(), Some(SecretString::from("key")))
    }

    #[test]
    fn request_uses_camel_case_fields() {
        let body = TtsRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: "Hi" }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechSettings {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoice { voice_name: "Puck" },
                    },
                    language_code: "en",
                },
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["generationConfig"]["responseModalities"][0], "AUDIO");
        assert_eq!(
            json["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]["voiceName"],
            "Puck"
        );
    }

    #[test]
    fn pcm_is_wrapped_as_wav() {
        let inline = InlineData {
            mime_type: "audio/L16;codec=pcm;rate=24000".to_string(),
            data: BASE64.encode([0u8; 8]),
        };
        let audio = provider().decode_audio(inline).unwrap();
        assert_eq!(audio.format(), AudioFormat::Wav);
        assert_eq!(&audio.data()[0..4], b"RIFF");
        assert_eq!(audio.size_bytes(), 52);
    }

    #[test]
    fn mp3_is_kept() {
        let inline = InlineData {
            mime_type: "audio/mpeg".to_string(),
            data: BASE64.encode([0xFF, 0xFB]),
        };
        let audio = provider().decode_audio(inline).unwrap();
        assert_eq!(audio.format(), AudioFormat::Mp3);
        assert_eq!(audio.data(), &[0xFF, 0xFB]);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let inline = InlineData {
            mime_type: "audio/pcm".to_string(),
            data: "***".to_string(),
        };
        assert!(matches!(
            provider().decode_audio(inline),
            Err(SpeechError::AudioProcessing(_))
        ));
    }

    #[test]
    fn resource_exhausted_is_rate_limit() {
        let err = classify_failure(StatusCode::FORBIDDEN, "{\"status\":\"RESOURCE_EXHAUSTED\"}");
        assert!(err.is_rate_limited());
        assert!(classify_failure(StatusCode::TOO_MANY_REQUESTS, "").is_rate_limited());
        assert!(!classify_failure(StatusCode::BAD_REQUEST, "bad").is_rate_limited());
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let provider = GeminiTtsProvider::new(GeminiTtsConfig::default(), None);
        let err = provider
            .synthesize(SpeechRequest::new("Hi", "en").with_voice("Puck"))
            .await
            .unwrap_err();
        assert!(matches!(err, SpeechError::MissingApiKey(_)));
    }
}
