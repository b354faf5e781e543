use super::*;

#[test]
fn status_error_shows_detail_verbatim() {
    let err = ApiError::Status { status: 500, detail: Some("bad url".to_owned()) };
    assert_eq!(err.to_string(), "bad url");
}

#[test]
fn status_error_without_detail_shows_status_code() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[test]
fn transport_error_shows_underlying_message() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn parse_body_decodes_expected_shape() {
    let resp: CrawlResponse = parse_body(r#"{"markdown":"hello"}"#).unwrap();
    assert_eq!(resp.markdown, "hello");
}

#[test]
fn parse_body_wrong_shape_is_decode_error() {
    let err = parse_body::<ChatResponse>(r#"{"markdown":"hello"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(err.to_string().starts_with("invalid response body: "));
}

#[test]
fn http_backend_keeps_normalized_base_url() {
    let config = ClientConfig::default().with_backend_url("http://127.0.0.1:8123/").unwrap();
    let backend = HttpBackend::new(&config).unwrap();
    assert_eq!(backend.base_url(), "http://127.0.0.1:8123");
}
