//! Same-origin pass-through to the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hydrated console calls `/api/...` on its own origin; this handler
//! replays each call against `CONSOLE_BACKEND_URL` and answers with the
//! backend's status, content type and body. The bearer header is forwarded
//! untouched and never inspected here.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Mount point of the pass-through on the host.
pub const API_PREFIX: &str = "/api";

/// Request headers copied onto the upstream call.
pub const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No backend URL was configured at startup.
    #[error("backend not configured")]
    NotConfigured,

    /// The upstream call failed before a response arrived.
    #[error("backend unreachable: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Still-encoded request path with [`API_PREFIX`] removed. The raw URI is
/// used so percent-encoded segments such as `bob%2Fops` reach the backend
/// exactly as the browser sent them.
pub fn backend_path(uri_path: &str) -> &str {
    match uri_path.strip_prefix(API_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => uri_path,
    }
}

/// Backend URL for `path` (the part after `/api/`) and the raw query.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Subset of `headers` the backend needs.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        for value in headers.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.backend_url.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = upstream_url(base, backend_path(uri.path()), uri.query());

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "backend request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "backend response body failed");
        ProxyError::Upstream(e.to_string())
    })?;
    tracing::debug!(%method, %url, status = status.as_u16(), "backend call");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
