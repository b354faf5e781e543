//! Backend HTTP contract: `POST /crawl` and `POST /chat`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page talks to the backend only through the [`Backend`] trait so the
//! controller can be driven by a mock in tests. [`HttpBackend`] is the real
//! implementation over `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an [`ApiError`] whose `Display` text is exactly the
//! message the page shows. Non-2xx bodies are read leniently: a string
//! `detail` wins, anything else falls back to the status-code message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{ChatRequest, ChatResponse, CrawlRequest, CrawlResponse, error_detail};
use crate::config::{ClientConfig, ConfigError};

pub const CRAWL_PATH: &str = "crawl";
pub const CHAT_PATH: &str = "chat";

/// A failed backend call, displayed as the user-facing error message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused, reset, timeout).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },

    /// A 2xx body did not match the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("HTTP error! status: {status}"),
    }
}

/// The two backend operations the page depends on.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Convert a URL into markdown.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a malformed body.
    async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlResponse, ApiError>;

    /// Answer a question against markdown context.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a malformed body.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;
}

// =============================================================================
// HTTP BACKEND
// =============================================================================

/// `reqwest`-backed [`Backend`] bound to one base address.
pub struct HttpBackend {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    /// Build the HTTP client, applying any configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend fails to initialize.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeouts.request() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.timeouts.connect() {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build().map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config: config.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.backend_url
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + Sync + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "backend request");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.text().await {
                Ok(text) => error_detail(&text),
                Err(e) => {
                    tracing::debug!(%url, error = %e, "failed to read error body");
                    None
                }
            };
            return Err(ApiError::Status { status: status.as_u16(), detail });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_body(&text)
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlResponse, ApiError> {
        self.post_json(CRAWL_PATH, request).await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post_json(CHAT_PATH, request).await
    }
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
