use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;

use super::*;

/// Upstream that answers 201 with the request URI it received as text.
async fn spawn_echo_backend() -> String {
    async fn echo(uri: Uri) -> impl IntoResponse {
        (StatusCode::CREATED, [(header::CONTENT_TYPE, "text/x-echo")], uri.to_string())
    }
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().fallback(echo)).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(backend_url: Option<&str>) -> AppState {
    AppState { http: reqwest::Client::new(), backend_url: backend_url.map(Arc::from) }
}

async fn call(state: AppState, method: Method, uri: &str) -> Response {
    match forward(State(state), method, uri.parse().unwrap(), HeaderMap::new(), Bytes::new()).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(
        upstream_url("http://backend:8080", "users/ann%20b/role", Some("x=1&y=2")),
        "http://backend:8080/users/ann%20b/role?x=1&y=2"
    );
}

#[test]
fn upstream_url_omits_empty_query() {
    assert_eq!(upstream_url("http://backend:8080/", "/admin", Some("")), "http://backend:8080/admin");
    assert_eq!(upstream_url("http://backend:8080", "captcha/new", None), "http://backend:8080/captcha/new");
}

#[test]
fn forwarded_headers_keeps_only_api_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(header::COOKIE, HeaderValue::from_static("session=1"));
    headers.insert(header::HOST, HeaderValue::from_static("console.local"));

    let out = forwarded_headers(&headers);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::NotConfigured.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn error_response_carries_json_error() {
    let response = ProxyError::Upstream("connection refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn backend_path_strips_only_the_api_mount() {
    assert_eq!(backend_path("/api/users/bob%2Fops/role"), "/users/bob%2Fops/role");
    assert_eq!(backend_path("/api"), "");
    assert_eq!(backend_path("/apiary/x"), "/apiary/x");
}

#[tokio::test]
async fn forward_keeps_encoded_segments_and_query() {
    let base = spawn_echo_backend().await;
    let cases = [
        ("/api/users/bob%2Fops/role", "/users/bob%2Fops/role"),
        ("/api/users/a%3Fb/role", "/users/a%3Fb/role"),
        ("/api/accounting/users/ann%20b/charge?x=1&y=%26", "/accounting/users/ann%20b/charge?x=1&y=%26"),
    ];
    for (sent, expected) in cases {
        let response = call(state_for(Some(&base)), Method::PUT, sent).await;
        assert_eq!(body_text(response).await, expected, "{sent}");
    }
}

#[tokio::test]
async fn forward_returns_upstream_status_and_content_type() {
    let base = spawn_echo_backend().await;
    let response = call(state_for(Some(&base)), Method::GET, "/api/roles").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "text/x-echo");
}

#[tokio::test]
async fn forward_without_backend_is_unavailable() {
    let response = call(state_for(None), Method::GET, "/api/roles").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"], "backend not configured");
}

#[tokio::test]
async fn forward_unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = call(state_for(Some(&format!("http://{addr}"))), Method::GET, "/api/roles").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("backend unreachable"));
}
