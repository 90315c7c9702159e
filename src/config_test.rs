use std::collections::HashMap;

use super::*;

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map: HashMap<&str, &str> = vars.iter().copied().collect();
    move |key: &str| map.get(key).map(|v| (*v).to_owned())
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, None);
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts { request_secs: DEFAULT_PROXY_TIMEOUT_SECS, connect_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn overrides_are_parsed() {
    let cfg = ConsoleConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("CONSOLE_BACKEND_URL", "https://backend.test/v1/"),
        ("CONSOLE_PROXY_TIMEOUT_SECS", "5"),
        ("CONSOLE_PROXY_CONNECT_TIMEOUT_SECS", " 2 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url.as_deref(), Some("https://backend.test/v1"));
    assert_eq!(cfg.timeouts, ProxyTimeouts { request_secs: 5, connect_secs: 2 });
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(5));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ConsoleConfig::from_lookup(lookup(&[("PORT", ""), ("CONSOLE_BACKEND_URL", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, None);
}

#[test]
fn malformed_port_errors() {
    let err = ConsoleConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() });
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn out_of_range_port_errors() {
    let err = ConsoleConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "PORT", .. }));
}

#[test]
fn malformed_timeout_errors() {
    let err = ConsoleConfig::from_lookup(lookup(&[("CONSOLE_PROXY_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "CONSOLE_PROXY_TIMEOUT_SECS", .. }));
}

#[test]
fn backend_url_requires_http_scheme() {
    let err = ConsoleConfig::from_lookup(lookup(&[("CONSOLE_BACKEND_URL", "backend:8080")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBackendUrl("backend:8080".to_owned()));
}
