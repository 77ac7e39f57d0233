//! WireMock tests for the Google Translate client

use integration_translate::{
    GoogleTranslateClient, TranslateConfig, TranslateError, TranslationClient,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn client_for(server: &MockServer, max_chunk_chars: usize) -> GoogleTranslateClient {
    GoogleTranslateClient::new(TranslateConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        max_chunk_chars,
    })
    .unwrap()
}

#[tokio::test]
async fn translates_with_auto_detected_source() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "auto"))
        .and(query_param("tl", "fr"))
        .and(query_param("q", "Hello world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [["Bonjour le monde", "Hello world", null, null, 10]],
            null,
            "en"
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 4500);
    assert_eq!(
        client.translate("Hello world", "fr").await.unwrap(),
        "Bonjour le monde"
    );
}

#[tokio::test]
async fn long_text_is_sent_in_chunks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([[["chunk", "x"]], null, "en"])),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server, 10);
    let translated = client
        .translate("aaaa bbbb cccc dddd eeee", "de")
        .await
        .unwrap();
    assert_eq!(translated, "chunk chunk chunk");
}

#[tokio::test]
async fn rate_limit_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server, 4500);
    let err = client.translate("Hello", "es").await.unwrap_err();
    assert!(matches!(err, TranslateError::RateLimitExceeded));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = client_for(&server, 4500);
    let err = client.translate("Hello", "es").await.unwrap_err();
    assert!(matches!(err, TranslateError::ParseError(_)));
}

#[tokio::test]
async fn server_error_is_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server, 4500);
    let err = client.translate("Hello", "it").await.unwrap_err();
    assert!(matches!(err, TranslateError::RequestFailed(_)));
}
