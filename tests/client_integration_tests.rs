use mediq::transport::{AnswerService, ApiClient, TransportError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

// ============================================================================
// send_query tests
// ============================================================================

#[tokio::test]
async fn test_send_query_returns_answer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(serde_json::json!({
            "query": "What are the symptoms of diabetes?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "Common symptoms include increased thirst and fatigue."
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let answer = client
        .send_query("What are the symptoms of diabetes?")
        .await
        .unwrap();

    assert_eq!(
        answer.answer,
        "Common symptoms include increased thirst and fatigue."
    );
}

#[tokio::test]
async fn test_send_query_preserves_query_text_exactly() {
    let mock_server = MockServer::start().await;

    // Leading/trailing whitespace must reach the wire untouched
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(serde_json::json!({ "query": "  spaced out  " })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "answer": "ok" })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let answer = client.send_query("  spaced out  ").await.unwrap();
    assert_eq!(answer.answer, "ok");
}

#[tokio::test]
async fn test_send_query_server_error_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let err = client.send_query("anything").await.unwrap_err();

    match err {
        TransportError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal failure");
        }
        other => panic!("Expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn test_send_query_malformed_body_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let err = client.send_query("anything").await.unwrap_err();

    assert!(matches!(err, TransportError::Parse(_)));
}

#[tokio::test]
async fn test_send_query_unreachable_host_maps_to_network_error() {
    // Port 1 is essentially guaranteed to refuse connections
    let client = ApiClient::new("http://127.0.0.1:1".to_string());
    let err = client.send_query("anything").await.unwrap_err();

    assert!(matches!(err, TransportError::Network(_)));
}

// ============================================================================
// check_status tests
// ============================================================================

#[tokio::test]
async fn test_check_status_ok_when_service_healthy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "healthy" })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    assert!(client.check_status().await.is_ok());
}

#[tokio::test]
async fn test_check_status_error_when_service_unhealthy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let err = client.check_status().await.unwrap_err();
    assert!(matches!(err, TransportError::Api { status: 503, .. }));
}
