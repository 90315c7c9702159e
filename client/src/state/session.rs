//! Session state for the signed-in operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<SessionState>` as context. It is the single
//! source of truth for the bearer token: pages hand it to `ApiClient`, the
//! route guard reads its claims, and logout or an expired/undecodable token
//! invalidates it (memory and localStorage together).
//!
//! Decoded claims drive navigation only. The backend authorizes every call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::storage;
use crate::util::token::{Claims, TokenError, decode_claims};

/// Where the console sends an operator after login, by role.
pub const ADMIN_LANDING: &str = "/admin";
pub const DEFAULT_LANDING: &str = "/sms";
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub claims: Option<Claims>,
    /// False until the stored token has been read after hydration.
    pub restored: bool,
}

/// Snapshot of the session as the route guard sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus<'a> {
    Restoring,
    Anonymous,
    Expired,
    Active(&'a Claims),
}

impl SessionState {
    /// Build a session from a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns the decode error when the token payload cannot be read.
    pub fn signed_in(token: String) -> Result<Self, TokenError> {
        let claims = decode_claims(&token)?;
        Ok(Self { token: Some(token), claims: Some(claims), restored: true })
    }

    /// Build a session from a previously stored token.
    ///
    /// Undecodable or already-expired tokens yield an anonymous session.
    pub fn from_stored(token: Option<String>, now_secs: i64) -> Self {
        let session = token.and_then(|t| Self::signed_in(t).ok());
        match session {
            Some(s) if s.claims.as_ref().is_some_and(|c| !c.is_expired(now_secs)) => s,
            _ => Self::anonymous(),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None, claims: None, restored: true }
    }

    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.claims.as_ref().map(|c| c.role.as_str())
    }

    pub fn status(&self, now_secs: i64) -> SessionStatus<'_> {
        if !self.restored {
            return SessionStatus::Restoring;
        }
        match (&self.token, &self.claims) {
            (Some(_), Some(claims)) if claims.is_expired(now_secs) => SessionStatus::Expired,
            (Some(_), Some(claims)) => SessionStatus::Active(claims),
            _ => SessionStatus::Anonymous,
        }
    }
}

/// Landing route for a freshly signed-in operator.
pub fn landing_route(claims: &Claims) -> &'static str {
    if claims.is_admin() { ADMIN_LANDING } else { DEFAULT_LANDING }
}

/// Current wall-clock time in Unix seconds; `0` outside the browser, which
/// keeps server renders from ever treating a token as expired.
#[allow(clippy::cast_possible_truncation)]
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Load the stored token into `session`, dropping it if it is unusable.
pub fn restore(session: RwSignal<SessionState>) {
    let stored = storage::load_token();
    let had_token = stored.is_some();
    let next = SessionState::from_stored(stored, now_secs());
    if had_token && next.token.is_none() {
        storage::clear_token();
    }
    session.set(next);
}

/// Persist a newly issued token and make it the active session.
///
/// # Errors
///
/// Returns the decode error when the token payload cannot be read; the
/// session is left unchanged in that case.
pub fn sign_in(session: RwSignal<SessionState>, token: String) -> Result<Claims, TokenError> {
    let next = SessionState::signed_in(token)?;
    if let Some(token) = next.bearer() {
        storage::save_token(token);
    }
    let claims = next.claims.clone().ok_or(TokenError::Malformed)?;
    session.set(next);
    Ok(claims)
}

/// Forget the token in memory and in storage.
pub fn sign_out(session: RwSignal<SessionState>) {
    storage::clear_token();
    session.set(SessionState::anonymous());
}
