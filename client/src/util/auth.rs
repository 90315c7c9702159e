//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` applies these rules on every privileged path so each one
//! redirects identically. The guard only shapes navigation: a forged or
//! edited token can get past it, and the backend still refuses the calls.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{self, DEFAULT_LANDING, LOGIN_ROUTE, SessionState, SessionStatus};

/// Access level a route requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Any operator holding a live token.
    Authenticated,
    /// Operators whose role claim is `admin`.
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not restored yet; render a placeholder and decide later.
    Pending,
    Render,
    Redirect {
        to: &'static str,
        /// Drop the stored token before navigating.
        invalidate: bool,
    },
}

pub fn guard_decision(access: Access, state: &SessionState, now_secs: i64) -> GuardDecision {
    match state.status(now_secs) {
        SessionStatus::Restoring => GuardDecision::Pending,
        SessionStatus::Anonymous => GuardDecision::Redirect { to: LOGIN_ROUTE, invalidate: state.token.is_some() },
        SessionStatus::Expired => GuardDecision::Redirect { to: LOGIN_ROUTE, invalidate: true },
        SessionStatus::Active(claims) => match access {
            Access::Admin if !claims.is_admin() => GuardDecision::Redirect { to: DEFAULT_LANDING, invalidate: false },
            _ => GuardDecision::Render,
        },
    }
}

/// Redirect away from the current route whenever the guard says so.
pub fn install_guard_redirect<F>(access: Access, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if let GuardDecision::Redirect { to, invalidate } = guard_decision(access, &state, session::now_secs()) {
            // Signing out re-runs this effect, which then navigates.
            if invalidate {
                session::sign_out(session);
                return;
            }
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
