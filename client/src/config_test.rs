use super::*;

// =============================================================
// from_values
// =============================================================

#[test]
fn defaults_to_local_backend_without_timeouts() {
    let cfg = ClientConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.timeouts, Timeouts::default());
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn trailing_slashes_and_whitespace_are_trimmed() {
    let cfg = ClientConfig::from_values(Some("  https://api.example.test/v1//  "), None, None).unwrap();
    assert_eq!(cfg.backend_url, "https://api.example.test/v1");
}

#[test]
fn timeouts_parse_as_seconds() {
    let cfg = ClientConfig::from_values(None, Some("42"), Some(" 7 ")).unwrap();
    assert_eq!(cfg.timeouts, Timeouts { request_secs: Some(42), connect_secs: Some(7) });
    assert_eq!(cfg.timeouts.request(), Some(Duration::from_secs(42)));
    assert_eq!(cfg.timeouts.connect(), Some(Duration::from_secs(7)));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ClientConfig::from_values(None, Some("0"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTimeout { var: REQUEST_TIMEOUT_VAR, value: "0".into() });
}

#[test]
fn validated_timeouts_reject_zero() {
    let err = Timeouts::validated(Some(5), Some(0)).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTimeout { var: CONNECT_TIMEOUT_VAR, value: "0".into() });

    let ok = Timeouts::validated(Some(5), None).unwrap();
    assert_eq!(ok, Timeouts { request_secs: Some(5), connect_secs: None });
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let err = ClientConfig::from_values(None, None, Some("soon")).unwrap_err();
    assert!(err.to_string().contains(CONNECT_TIMEOUT_VAR));
}

#[test]
fn relative_backend_url_is_rejected() {
    let err = ClientConfig::from_values(Some("localhost:8000/api"), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBackendUrl { .. }));
}

#[test]
fn non_http_scheme_is_rejected() {
    let err = ClientConfig::from_values(Some("ftp://files.example.test"), None, None).unwrap_err();
    assert!(err.to_string().contains("unsupported scheme 'ftp'"));
}

// =============================================================
// endpoint / overrides
// =============================================================

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint("crawl"), "http://localhost:8000/crawl");
    assert_eq!(cfg.endpoint("/chat"), "http://localhost:8000/chat");
}

#[test]
fn with_backend_url_normalizes() {
    let cfg = ClientConfig::default().with_backend_url("http://127.0.0.1:9000/").unwrap();
    assert_eq!(cfg.endpoint("crawl"), "http://127.0.0.1:9000/crawl");
}

#[test]
fn with_backend_url_rejects_garbage() {
    let result = ClientConfig::default().with_backend_url("not a url");
    assert!(result.is_err());
}

// =============================================================
// from_env
// =============================================================

/// The only test touching the `WIKICHAT_*` variables.
#[test]
fn from_env_reads_variables_and_treats_empty_as_unset() {
    unsafe {
        std::env::set_var(BACKEND_URL_VAR, "http://backend.internal:8080/");
        std::env::set_var(REQUEST_TIMEOUT_VAR, "");
        std::env::set_var(CONNECT_TIMEOUT_VAR, "3");
    }

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.backend_url, "http://backend.internal:8080");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: None, connect_secs: Some(3) });

    unsafe {
        std::env::remove_var(BACKEND_URL_VAR);
        std::env::remove_var(REQUEST_TIMEOUT_VAR);
        std::env::remove_var(CONNECT_TIMEOUT_VAR);
    }
}
