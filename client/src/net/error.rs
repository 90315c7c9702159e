//! Errors returned by [`super::api::ApiClient`].
//!
//! The operator never sees these variants: every call site collapses them
//! into one "operation failed" alert, appending the backend's `error` text
//! when the response carried one.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Alert text for a failed operation: `generic`, plus the backend's own
    /// message when it sent one.
    pub fn alert_text(&self, generic: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => {
                format!("{generic}: {}", message.trim())
            }
            _ => generic.to_owned(),
        }
    }
}

#[allow(clippy::ref_option)]
fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}
