use super::*;

// =============================================================
// Outbound bodies
// =============================================================

#[test]
fn login_request_uses_backend_captcha_field_names() {
    let req = LoginRequest {
        username: "alice".to_owned(),
        password: "pw".to_owned(),
        captcha_id: "c1".to_owned(),
        captcha_solution: "123456".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "username": "alice",
            "password": "pw",
            "captchaId": "c1",
            "captchaSolution": "123456"
        })
    );
}

#[test]
fn dynamic_route_serializes_method_and_accounting_flag() {
    let route = DynamicRoute {
        path: "/sms".to_owned(),
        method: RouteMethod::Post,
        endpoints: vec!["https://a.example".to_owned()],
        need_accounting: true,
    };
    assert_eq!(
        serde_json::to_value(&route).unwrap(),
        serde_json::json!({
            "path": "/sms",
            "method": "POST",
            "endpoints": ["https://a.example"],
            "needAccounting": true
        })
    );
}

#[test]
fn sms_batch_uses_snake_case_track_ids() {
    let batch = SmsBatch {
        senders: vec!["s".to_owned()],
        receivers: vec!["r".to_owned()],
        text: "hi".to_owned(),
        track_ids: vec![],
    };
    let value = serde_json::to_value(&batch).unwrap();
    assert_eq!(value["track_ids"], serde_json::json!([]));
    assert_eq!(value["text"], "hi");
}

// =============================================================
// RouteMethod
// =============================================================

#[test]
fn route_method_defaults_to_any() {
    assert_eq!(RouteMethod::default(), RouteMethod::Any);
}

#[test]
fn route_method_from_form_value_is_case_insensitive() {
    assert_eq!(RouteMethod::from_form_value("delete"), RouteMethod::Delete);
    assert_eq!(RouteMethod::from_form_value(" GET "), RouteMethod::Get);
    assert_eq!(RouteMethod::from_form_value("PATCH"), RouteMethod::Any);
}

#[test]
fn route_method_as_str_matches_serde() {
    for method in RouteMethod::ALL {
        assert_eq!(serde_json::to_value(method).unwrap(), method.as_str());
    }
}

// =============================================================
// Inbound envelopes
// =============================================================

#[test]
fn roles_envelope_accepts_orm_field_names() {
    let raw = r#"{"roles":[{"ID":3,"CreatedAt":"2024-01-01T00:00:00Z","Name":"admin","Description":"all access"}]}"#;
    let env: RolesEnvelope = serde_json::from_str(raw).unwrap();
    assert_eq!(
        env.roles,
        vec![Role { id: 3, name: "admin".to_owned(), description: "all access".to_owned() }]
    );
}

#[test]
fn roles_envelope_accepts_lowercase_field_names() {
    let raw = r#"{"roles":[{"id":1,"name":"user"}]}"#;
    let env: RolesEnvelope = serde_json::from_str(raw).unwrap();
    assert_eq!(env.roles[0].name, "user");
    assert_eq!(env.roles[0].description, "");
}

#[test]
fn users_envelope_null_is_empty() {
    let env: UsersEnvelope = serde_json::from_str(r#"{"users":null}"#).unwrap();
    assert!(env.users.is_empty());
    let env: UsersEnvelope = serde_json::from_str("{}").unwrap();
    assert!(env.users.is_empty());
}

#[test]
fn rules_envelope_accepts_both_spellings() {
    let raw = r#"{"rules":[{"endpoint":"/sms","charge":1.5},{"Endpoint":"/premium","Charge":3}]}"#;
    let env: RulesEnvelope = serde_json::from_str(raw).unwrap();
    assert_eq!(env.rules.len(), 2);
    assert_eq!(env.rules[1].endpoint, "/premium");
    assert!((env.rules[1].charge - 3.0).abs() < f64::EPSILON);
}

#[test]
fn phones_envelope_reads_strings() {
    let env: PhonesEnvelope = serde_json::from_str(r#"{"phones":["+1","+2"]}"#).unwrap();
    assert_eq!(env.phones, vec!["+1", "+2"]);
}

#[test]
fn sms_receipt_reads_hyphenated_id() {
    let receipt: SmsReceipt = serde_json::from_str(r#"{"message-id":"m-1"}"#).unwrap();
    assert_eq!(receipt.message_id.as_deref(), Some("m-1"));
}

#[test]
fn captcha_challenge_reads_id() {
    let challenge: CaptchaChallenge = serde_json::from_str(r#"{"captchaId":"abc"}"#).unwrap();
    assert_eq!(challenge.captcha_id, "abc");
}
