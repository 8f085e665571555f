//! # Artifact Retrieval Integration Tests
//!
//! Exercises `ArtifactClient` against wiremock servers: URL fallback
//! order, non-success statuses, and unparseable bodies.

use geoplot_agent::{AgentError, ArtifactClient, ArtifactConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> ArtifactClient {
    ArtifactClient::new(ArtifactConfig::default()).expect("client build")
}

#[tokio::test]
async fn fetches_json_from_the_first_working_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artifact"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"points": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let urls = vec![format!("{}/artifact", server.uri())];
    let value = client().fetch_json(&urls).await.expect("fetch");
    assert_eq!(value, serde_json::json!({"points": []}));
}

#[tokio::test]
async fn falls_back_to_the_next_url_on_failure() {
    let broken = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&broken)
        .await;

    let working = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&working)
        .await;

    let urls = vec![broken.uri(), working.uri()];
    let value = client().fetch_json(&urls).await.expect("fetch");
    assert_eq!(value, serde_json::json!({"ok": true}));
}

#[tokio::test]
async fn reports_the_last_failure_when_every_url_is_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let urls = vec![server.uri()];
    let err = client().fetch_json(&urls).await.unwrap_err();
    match err {
        AgentError::ArtifactUnavailable { reason } => {
            assert!(reason.contains("404"), "reason was: {reason}");
        }
        other => panic!("expected ArtifactUnavailable, got: {other}"),
    }
}

#[tokio::test]
async fn unparseable_body_counts_as_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let urls = vec![server.uri()];
    let err = client().fetch_json(&urls).await.unwrap_err();
    assert!(matches!(err, AgentError::ArtifactUnavailable { .. }));
}

#[tokio::test]
async fn no_urls_is_an_error() {
    let err = client().fetch_json(&[]).await.unwrap_err();
    assert!(matches!(err, AgentError::ArtifactUnavailable { .. }));
}
