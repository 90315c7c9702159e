use super::*;
use crate::util::token::Claims;

fn active(role: &str, exp: Option<i64>) -> SessionState {
    SessionState {
        token: Some("h.p.s".to_owned()),
        claims: Some(Claims { user: Some("1".to_owned()), role: role.to_owned(), exp }),
        restored: true,
    }
}

#[test]
fn pending_until_session_restored() {
    let state = SessionState::default();
    assert_eq!(guard_decision(Access::Admin, &state, 0), GuardDecision::Pending);
    assert_eq!(guard_decision(Access::Authenticated, &state, 0), GuardDecision::Pending);
}

#[test]
fn no_token_redirects_to_login() {
    let state = SessionState::anonymous();
    assert_eq!(
        guard_decision(Access::Authenticated, &state, 0),
        GuardDecision::Redirect { to: "/login", invalidate: false }
    );
}

#[test]
fn non_admin_on_admin_route_redirects_to_sms() {
    let state = active("user", None);
    assert_eq!(
        guard_decision(Access::Admin, &state, 0),
        GuardDecision::Redirect { to: "/sms", invalidate: false }
    );
}

#[test]
fn role_mismatch_never_renders_children() {
    for role in ["", "user", "Admin", "administrator", "operator"] {
        let state = active(role, None);
        assert_ne!(guard_decision(Access::Admin, &state, 0), GuardDecision::Render, "role {role:?}");
    }
}

#[test]
fn admin_renders_admin_and_authenticated_routes() {
    let state = active("admin", Some(1_000));
    assert_eq!(guard_decision(Access::Admin, &state, 10), GuardDecision::Render);
    assert_eq!(guard_decision(Access::Authenticated, &state, 10), GuardDecision::Render);
}

#[test]
fn non_admin_renders_authenticated_routes() {
    let state = active("user", None);
    assert_eq!(guard_decision(Access::Authenticated, &state, 0), GuardDecision::Render);
}

#[test]
fn expired_token_invalidates_and_redirects_to_login() {
    let state = active("admin", Some(100));
    assert_eq!(
        guard_decision(Access::Admin, &state, 100),
        GuardDecision::Redirect { to: "/login", invalidate: true }
    );
}

#[test]
fn token_without_claims_invalidates_and_redirects_to_login() {
    let state = SessionState { token: Some("garbage".to_owned()), claims: None, restored: true };
    assert_eq!(
        guard_decision(Access::Authenticated, &state, 0),
        GuardDecision::Redirect { to: "/login", invalidate: true }
    );
}
