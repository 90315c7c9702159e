use super::*;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token(role: &str, exp: Option<i64>) -> String {
    let mut payload = serde_json::json!({ "user": 7, "role": role });
    if let Some(exp) = exp {
        payload["exp"] = serde_json::json!(exp);
    }
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes()))
}

#[test]
fn default_session_is_restoring() {
    let state = SessionState::default();
    assert!(!state.restored);
    assert_eq!(state.status(0), SessionStatus::Restoring);
}

#[test]
fn signed_in_decodes_claims() {
    let state = SessionState::signed_in(token("admin", Some(500))).unwrap();
    assert_eq!(state.role(), Some("admin"));
    assert!(state.bearer().is_some());
    assert!(matches!(state.status(100), SessionStatus::Active(c) if c.is_admin()));
}

#[test]
fn signed_in_rejects_garbage() {
    assert!(SessionState::signed_in("not-a-token".to_owned()).is_err());
}

#[test]
fn from_stored_without_token_is_anonymous() {
    let state = SessionState::from_stored(None, 0);
    assert_eq!(state, SessionState::anonymous());
    assert_eq!(state.status(0), SessionStatus::Anonymous);
}

#[test]
fn from_stored_drops_undecodable_token() {
    let state = SessionState::from_stored(Some("garbage".to_owned()), 0);
    assert_eq!(state.bearer(), None);
    assert_eq!(state.status(0), SessionStatus::Anonymous);
}

#[test]
fn from_stored_drops_expired_token() {
    let state = SessionState::from_stored(Some(token("user", Some(50))), 100);
    assert_eq!(state.bearer(), None);
}

#[test]
fn from_stored_keeps_live_token() {
    let raw = token("user", Some(500));
    let state = SessionState::from_stored(Some(raw.clone()), 100);
    assert_eq!(state.bearer(), Some(raw.as_str()));
    assert_eq!(state.role(), Some("user"));
}

#[test]
fn status_reports_expiry_after_sign_in() {
    let state = SessionState::signed_in(token("user", Some(100))).unwrap();
    assert_ne!(state.status(99), SessionStatus::Expired);
    assert_eq!(state.status(100), SessionStatus::Expired);
}

#[test]
fn landing_route_depends_on_role() {
    let admin = SessionState::signed_in(token("admin", None)).unwrap();
    let user = SessionState::signed_in(token("operator", None)).unwrap();
    assert_eq!(landing_route(admin.claims.as_ref().unwrap()), ADMIN_LANDING);
    assert_eq!(landing_route(user.claims.as_ref().unwrap()), DEFAULT_LANDING);
}
