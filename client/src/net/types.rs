//! Wire DTOs for the backend's `/crawl` and `/chat` endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly. Error bodies are not given
//! a strict type: the backend may answer a failure with `{"detail": string}`,
//! with a validation array under `detail`, or with a non-JSON page, so the
//! detail is extracted leniently by [`error_detail`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /crawl`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRequest {
    pub url: String,
}

/// Success body of `POST /crawl`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResponse {
    pub markdown: String,
}

/// Body of `POST /chat`. `context` carries the crawled markdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub context: String,
}

/// Success body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// Pull a usable `detail` message out of a failure body.
///
/// Returns `None` when the body is not JSON, has no `detail`, or the detail
/// is not a non-empty string.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return None,
    };
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}
