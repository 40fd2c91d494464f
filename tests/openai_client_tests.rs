//! End-to-end tests for the OpenAI transport adapter against a simulated
//! endpoint: a one-shot TCP listener serving a canned HTTP response.

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use fitcoach::{CompletionClient, CompletionConfig, ErrorCode, OpenAiClient};

/// Bind an ephemeral port, serve exactly one canned HTTP response, and return
/// the base URL to point the client at.
async fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}")
}

/// Consume the full request (headers plus Content-Length body) before
/// responding, so the client never sees a reset mid-write.
async fn read_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length: usize = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn client_for(base_url: String) -> CompletionClient {
    let config = CompletionConfig::default()
        .with_api_key("sk-test")
        .with_base_url(base_url);
    let transport = Arc::new(OpenAiClient::from_config(&config));
    CompletionClient::new(config, transport)
}

#[tokio::test]
async fn http_200_with_reply_yields_success() {
    let base_url = one_shot_server(
        "200 OK",
        r#"{"choices":[{"message":{"content":"Eat more protein."}}]}"#,
    )
    .await;

    let result = client_for(base_url).complete("What should I eat?").await;

    assert!(result.is_success());
    assert_eq!(result.text(), "Eat more protein.");
}

#[tokio::test]
async fn http_500_yields_transport_error() {
    let base_url = one_shot_server("500 Internal Server Error", r#"{"error":"boom"}"#).await;

    let result = client_for(base_url).complete("hello").await;

    assert!(!result.is_success());
    assert_eq!(result.error_code(), Some(ErrorCode::TransportError));
    assert!(result.text().contains("500"));
}

#[tokio::test]
async fn http_200_without_choices_yields_empty_response() {
    let base_url = one_shot_server("200 OK", r#"{"choices":[]}"#).await;

    let result = client_for(base_url).complete("hello").await;

    assert_eq!(result.error_code(), Some(ErrorCode::EmptyResponse));
}

#[tokio::test]
async fn malformed_body_yields_unknown_error() {
    let base_url = one_shot_server("200 OK", "not json at all").await;

    let result = client_for(base_url).complete("hello").await;

    assert_eq!(result.error_code(), Some(ErrorCode::UnknownError));
}

#[tokio::test]
async fn unreachable_endpoint_yields_unknown_error() {
    // Bind and immediately drop the listener so the port refuses connections.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client_for(format!("http://{addr}")).complete("hello").await;

    assert!(!result.is_success());
    assert_eq!(result.error_code(), Some(ErrorCode::UnknownError));
}
