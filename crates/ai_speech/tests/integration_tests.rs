//! Integration tests for ai_speech crate
//!
//! Exercises the real providers against mocked Google and Gemini endpoints.

use std::sync::Arc;

use ai_speech::{
    FallbackSpeechProvider, GeminiTtsConfig, GeminiTtsProvider, GoogleTtsConfig,
    GoogleTtsProvider, SpeechConfig, SpeechError, SpeechRequest, StandardBackend, TextToSpeech,
    build_speech_provider,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use domain::{AudioFormat, VoiceSelection};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Minimal MPEG audio frame header
fn mock_mp3_audio() -> Vec<u8> {
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        0x00, 0x00, 0x00, 0x00, // Padding
    ]
}

fn google_config(base_url: &str, max_chunk_chars: usize) -> GoogleTtsConfig {
    GoogleTtsConfig {
        base_url: base_url.to_string(),
        timeout_ms: 5000,
        max_chunk_chars,
    }
}

fn gemini_config(base_url: &str) -> GeminiTtsConfig {
    GeminiTtsConfig {
        base_url: base_url.to_string(),
        model: "tts-test".to_string(),
        timeout_ms: 5000,
        sample_rate: 24_000,
    }
}

fn gemini_audio_response(pcm: &[u8]) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{
                "inlineData": {
                    "mimeType": "audio/L16;codec=pcm;rate=24000",
                    "data": BASE64.encode(pcm)
                }
            }]}
        }]
    })
}

// ============ Standard voice ============

#[tokio::test]
async fn google_tts_returns_mp3() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .and(query_param("tl", "fr"))
        .and(query_param("client", "tw-ob"))
        .and(query_param("q", "Bonjour"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(mock_mp3_audio())
                .insert_header("content-type", "audio/mpeg"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = GoogleTtsProvider::new(google_config(&server.uri(), 200)).unwrap();
    let audio = provider
        .synthesize(SpeechRequest::new("Bonjour", "fr"))
        .await
        .unwrap();

    assert_eq!(audio.format(), AudioFormat::Mp3);
    assert_eq!(audio.data(), mock_mp3_audio().as_slice());
}

#[tokio::test]
async fn google_tts_concatenates_chunks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(mock_mp3_audio()))
        .expect(3)
        .mount(&server)
        .await;

    let provider = GoogleTtsProvider::new(google_config(&server.uri(), 12)).unwrap();
    let audio = provider
        .synthesize(SpeechRequest::new("Hello there. General Kenobi.", "en"))
        .await
        .unwrap();

    assert_eq!(audio.size_bytes(), mock_mp3_audio().len() * 3);
}

#[tokio::test]
async fn google_tts_empty_body_is_invalid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let provider = GoogleTtsProvider::new(google_config(&server.uri(), 200)).unwrap();
    let err = provider
        .synthesize(SpeechRequest::new("Hi", "en"))
        .await
        .unwrap_err();

    assert!(matches!(err, SpeechError::InvalidResponse(_)));
}

// ============ Named voice ============

#[tokio::test]
async fn gemini_tts_wraps_pcm_in_wav() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/tts-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": { "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } } }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_audio_response(&[0u8; 48])))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiTtsProvider::new(
        gemini_config(&server.uri()),
        Some(SecretString::from("test-key")),
    );
    let audio = provider
        .synthesize(SpeechRequest::new("Hallo", "de").with_voice("Kore"))
        .await
        .unwrap();

    assert_eq!(audio.format(), AudioFormat::Wav);
    assert_eq!(&audio.data()[0..4], b"RIFF");
    assert_eq!(audio.size_bytes(), 44 + 48);
}

#[tokio::test]
async fn gemini_rate_limit_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "status": "RESOURCE_EXHAUSTED", "message": "quota" }
        })))
        .mount(&server)
        .await;

    let provider = GeminiTtsProvider::new(
        gemini_config(&server.uri()),
        Some(SecretString::from("test-key")),
    );
    let err = provider
        .synthesize(SpeechRequest::new("Hi", "en").with_voice("Puck"))
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
}

// ============ Routing + fallback ============

#[tokio::test]
async fn failing_named_voice_falls_back_to_standard_mp3() {
    let gemini = MockServer::start().await;
    let google = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&gemini)
        .await;
    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .and(query_param("tl", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(mock_mp3_audio()))
        .expect(1)
        .mount(&google)
        .await;

    let provider = FallbackSpeechProvider::new(
        Arc::new(GoogleTtsProvider::new(google_config(&google.uri(), 200)).unwrap()),
        Arc::new(GeminiTtsProvider::new(
            gemini_config(&gemini.uri()),
            Some(SecretString::from("test-key")),
        )),
    );

    let audio = provider
        .synthesize("Hola mundo", "es", &VoiceSelection::Named("Fenrir".into()))
        .await
        .unwrap();

    assert_eq!(audio.format(), AudioFormat::Mp3);
}

#[tokio::test]
async fn missing_key_falls_back_to_placeholder() {
    let config = SpeechConfig {
        standard_backend: StandardBackend::Placeholder,
        ..SpeechConfig::default()
    };
    let provider = build_speech_provider(&config, None).unwrap();

    let audio = provider
        .synthesize("Bonjour", "fr", &VoiceSelection::Named("Puck".into()))
        .await
        .unwrap();

    assert_eq!(audio.format(), AudioFormat::PlainText);
    assert_eq!(audio.data(), b"Bonjour");
}
