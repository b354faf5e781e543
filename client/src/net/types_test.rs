use super::*;

// =============================================================
// Request/response shapes
// =============================================================

#[test]
fn crawl_request_serializes_url_only() {
    let body = serde_json::to_value(CrawlRequest { url: "https://example.com".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "url": "https://example.com" }));
}

#[test]
fn chat_request_carries_query_and_context() {
    let body = serde_json::to_value(ChatRequest {
        query: "What is X?".to_owned(),
        context: "# X\n\nX is a letter.".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "query": "What is X?", "context": "# X\n\nX is a letter." }));
}

#[test]
fn crawl_response_ignores_extra_fields() {
    let resp: CrawlResponse = serde_json::from_str(r##"{"markdown":"# Title","links":[]}"##).unwrap();
    assert_eq!(resp.markdown, "# Title");
}

#[test]
fn chat_response_requires_answer() {
    let result = serde_json::from_str::<ChatResponse>(r#"{"result":"42"}"#);
    assert!(result.is_err());
}

// =============================================================
// error_detail
// =============================================================

#[test]
fn error_detail_reads_string_detail() {
    assert_eq!(error_detail(r#"{"detail":"bad url"}"#), Some("bad url".to_owned()));
}

#[test]
fn error_detail_none_for_non_json() {
    assert_eq!(error_detail("Internal Server Error"), None);
    assert_eq!(error_detail(""), None);
}

#[test]
fn error_detail_none_without_detail_field() {
    assert_eq!(error_detail(r#"{"error":"nope"}"#), None);
}

#[test]
fn error_detail_none_for_empty_detail() {
    assert_eq!(error_detail(r#"{"detail":""}"#), None);
}

#[test]
fn error_detail_none_for_validation_array() {
    let body = r#"{"detail":[{"loc":["body","url"],"msg":"field required","type":"value_error.missing"}]}"#;
    assert_eq!(error_detail(body), None);
}
