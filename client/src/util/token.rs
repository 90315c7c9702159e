//! Bearer token claim decoding.
//!
//! The backend issues HS256 JWTs carrying `user`, `role`, and `exp` claims.
//! The console only reads the payload segment to pick a landing page and to
//! gate navigation; it never checks the signature. Nothing decoded here is
//! an authorization decision: the backend re-validates every request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Deserializer};

/// Role claim value that unlocks the admin pages.
pub const ADMIN_ROLE: &str = "admin";

/// Claims read from the token payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Backend user identifier; numeric IDs are normalized to strings.
    #[serde(default, deserialize_with = "deserialize_subject")]
    pub user: Option<String>,
    #[serde(default)]
    pub role: String,
    /// Expiry as Unix seconds.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Tokens without an `exp` claim never expire client-side.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not valid claims JSON: {0}")]
    Payload(String),
}

/// Decode the claims segment of `token` without verifying it.
///
/// # Errors
///
/// Returns [`TokenError`] when the token does not have three segments or the
/// payload is not base64url-encoded claims JSON.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    if payload.is_empty() {
        return Err(TokenError::Malformed);
    }

    let raw = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&raw).map_err(|e| TokenError::Payload(e.to_string()))
}

fn deserialize_subject<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
