//! Client configuration parsed from environment variables.
//!
//! The backend base address is fixed once at start-up; nothing in the page
//! reconfigures it afterwards.

use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const BACKEND_URL_VAR: &str = "WIKICHAT_BACKEND_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "WIKICHAT_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "WIKICHAT_CONNECT_TIMEOUT_SECS";

/// Errors raised while building configuration or the HTTP client from it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The backend base address is not an absolute http(s) URL.
    #[error("invalid backend URL '{url}': {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    /// A timeout variable is not a positive whole number of seconds.
    #[error("invalid {var}: '{value}' is not a positive number of seconds")]
    InvalidTimeout { var: &'static str, value: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Optional HTTP timeouts. `None` means the request may wait indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

impl Timeouts {
    /// Build timeouts from already-parsed values, rejecting zero the same way
    /// the environment variables are.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimeout` naming the matching variable when a value is `0`.
    pub fn validated(
        request_secs: Option<u64>,
        connect_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            request_secs: nonzero(REQUEST_TIMEOUT_VAR, request_secs)?,
            connect_secs: nonzero(CONNECT_TIMEOUT_VAR, connect_secs)?,
        })
    }

    #[must_use]
    pub fn request(&self) -> Option<Duration> {
        self.request_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Option<Duration> {
        self.connect_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Normalized base address with no trailing slash.
    pub backend_url: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { backend_url: DEFAULT_BACKEND_URL.to_owned(), timeouts: Timeouts::default() }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `WIKICHAT_BACKEND_URL`: default `http://localhost:8000`
    /// - `WIKICHAT_REQUEST_TIMEOUT_SECS`: no timeout when absent
    /// - `WIKICHAT_CONNECT_TIMEOUT_SECS`: no timeout when absent
    ///
    /// Empty values count as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend URL or a timeout does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env_value(BACKEND_URL_VAR).as_deref(),
            env_value(REQUEST_TIMEOUT_VAR).as_deref(),
            env_value(CONNECT_TIMEOUT_VAR).as_deref(),
        )
    }

    /// Build config from raw string values as they would appear in the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend URL or a timeout does not parse.
    pub fn from_values(
        backend_url: Option<&str>,
        request_timeout: Option<&str>,
        connect_timeout: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let backend_url = normalize_backend_url(backend_url.unwrap_or(DEFAULT_BACKEND_URL))?;
        let timeouts = Timeouts {
            request_secs: parse_timeout(REQUEST_TIMEOUT_VAR, request_timeout)?,
            connect_secs: parse_timeout(CONNECT_TIMEOUT_VAR, connect_timeout)?,
        };
        Ok(Self { backend_url, timeouts })
    }

    /// Replace the backend base address.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not an absolute http(s) URL.
    pub fn with_backend_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.backend_url = normalize_backend_url(url)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Full URL for a backend endpoint, e.g. `endpoint("crawl")`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

fn env_value(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn normalize_backend_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBackendUrl { url: raw.to_owned(), reason };

    let parsed = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout(var: &'static str, raw: Option<&str>) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(secs)),
        _ => Err(ConfigError::InvalidTimeout { var, value: raw.to_owned() }),
    }
}

fn nonzero(var: &'static str, secs: Option<u64>) -> Result<Option<u64>, ConfigError> {
    match secs {
        Some(0) => Err(ConfigError::InvalidTimeout { var, value: "0".to_owned() }),
        other => Ok(other),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
