//! Integration tests for the signed request pipeline
//!
//! Each test runs one query against a stub server and checks both what was
//! sent and how the reply is classified.

use serde_json::json;
use suiteql_cli::api::{QueryError, QueryRequest};
use suiteql_cli::cli::commands::query::execute_and_render;
use suiteql_cli::ui::RenderOptions;

use crate::support::{StubServer, client_for};

fn plain() -> RenderOptions {
    RenderOptions {
        color: false,
        ..RenderOptions::default()
    }
}

/// Test the wire format of a successful query
#[tokio::test]
async fn test_signed_request_wire_format() {
    let server = StubServer::respond_once(
        "200 OK",
        r#"{"links":[],"count":1,"hasMore":false,"items":[{"id":"42"}],"offset":0,"totalResults":1}"#,
    )
    .await;
    let client = client_for(&server.base_url);
    let request = QueryRequest::new("SELECT id FROM customer", Some(5), None).unwrap();

    let document = client.execute(&request).await.unwrap();
    let raw = server.received().await;
    let lower = raw.to_ascii_lowercase();

    assert_eq!(document["items"][0]["id"], json!("42"));
    assert!(
        raw.starts_with("POST /services/rest/query/v1/suiteql?limit=5 HTTP/1.1\r\n"),
        "unexpected request line: {}",
        raw.lines().next().unwrap_or_default()
    );
    assert!(lower.contains("content-type: application/json\r\n"));
    assert!(lower.contains("prefer: transient\r\n"));
    assert!(raw.contains("OAuth realm=\"TSTDRV1\""));
    assert!(raw.contains("oauth_consumer_key=\"consumer-key\""));
    assert!(raw.contains("oauth_token=\"token-id\""));
    assert!(raw.contains("oauth_signature_method=\"HMAC-SHA256\""));
    assert!(raw.contains("oauth_signature=\""));
    assert!(!raw.contains("consumer-secret"));
    assert!(!raw.contains("token-secret"));
    assert!(raw.ends_with(r#"{"q":"SELECT id FROM customer"}"#));
}

/// Test that zero pagination never reaches the wire
#[tokio::test]
async fn test_zero_pagination_omitted_from_url() {
    let server = StubServer::respond_once("200 OK", r#"{"items":[]}"#).await;
    let client = client_for(&server.base_url);
    let request = QueryRequest::new("SELECT 1", Some(0), Some(0)).unwrap();

    client.execute(&request).await.unwrap();
    let raw = server.received().await;

    assert!(raw.starts_with("POST /services/rest/query/v1/suiteql HTTP/1.1\r\n"));
}

/// Test that a server error carries both status and raw body
#[tokio::test]
async fn test_server_error_reports_status_and_body() {
    let server =
        StubServer::respond_once("500 Internal Server Error", r#"{"error":"bad query"}"#).await;
    let client = client_for(&server.base_url);
    let request = QueryRequest::new("SELECT nonsense", None, None).unwrap();

    let err = execute_and_render(&client, &request, &plain())
        .await
        .unwrap_err();
    let message = format!("{:#}", err);

    assert!(message.contains("500"), "{}", message);
    assert!(message.contains(r#"{"error":"bad query"}"#), "{}", message);
    match err.downcast_ref::<QueryError>() {
        Some(QueryError::Status { status, body }) => {
            assert_eq!(*status, 500);
            assert_eq!(body, r#"{"error":"bad query"}"#);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

/// Test that any non-200 success code is still an error
#[tokio::test]
async fn test_non_200_success_is_error() {
    let server = StubServer::respond_once("202 Accepted", "{}").await;
    let client = client_for(&server.base_url);
    let request = QueryRequest::new("SELECT 1", None, None).unwrap();

    let err = client.execute(&request).await.unwrap_err();
    assert!(matches!(err, QueryError::Status { status: 202, .. }));
}

/// Test that a malformed body is a parse error, not partial output
#[tokio::test]
async fn test_malformed_json_response() {
    let server = StubServer::respond_once("200 OK", r#"{"items": [1, 2"#).await;
    let client = client_for(&server.base_url);
    let request = QueryRequest::new("SELECT 1", None, None).unwrap();

    let err = client.execute(&request).await.unwrap_err();
    assert!(matches!(err, QueryError::Parse(_)));
    assert!(err.to_string().starts_with("error parsing JSON response"));
}

/// Test that a refused connection surfaces as a transport error
#[tokio::test]
async fn test_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = client_for(&base_url);
    let request = QueryRequest::new("SELECT 1", None, None).unwrap();

    let err = client.execute(&request).await.unwrap_err();
    assert!(matches!(err, QueryError::Transport(_)));
}

/// Test the full execute-and-render path for a successful reply
#[tokio::test]
async fn test_rendered_output_round_trips() {
    let body = r#"{"count":2,"items":[{"id":"1","name":"Acme"},{"id":"2","name":null}],"hasMore":true}"#;
    let server = StubServer::respond_once("200 OK", body).await;
    let client = client_for(&server.base_url);
    let request = QueryRequest::new("SELECT id, name FROM customer", Some(2), Some(0)).unwrap();

    let output = execute_and_render(&client, &request, &plain()).await.unwrap();

    assert!(output.starts_with("{\n  \"count\": 2,\n  \"items\": ["));
    let reparsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let original: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(reparsed, original);
}
