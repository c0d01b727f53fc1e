//! Client configuration.
//!
//! A `ClientConfig` is resolved once at startup and handed to `PlanApi` (or
//! `PlanClient`). There is no process-wide mutable configuration: to point at
//! another server, build another client.

use std::time::Duration;

use crate::error::ApiError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const ENV_BASE_URL: &str = "PLAN_API_BASE_URL";
pub const ENV_TOKEN: &str = "PLAN_API_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "PLAN_API_TIMEOUT_SECS";

/// Connection settings shared by every request of a client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix of the planning service.
    pub base_url: String,
    /// Sent as `authorization: Bearer <token>` when set.
    pub token: Option<String>,
    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// Whole-request timeout applied by the transport. `None` means the
    /// transport's own default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            headers: Vec::new(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read `PLAN_API_BASE_URL`, `PLAN_API_TOKEN` and `PLAN_API_TIMEOUT_SECS`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        config.token = lookup(ENV_TOKEN).filter(|t| !t.is_empty());
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ApiError::Config(format!("{ENV_TIMEOUT_SECS}={raw:?} is not a number of seconds")))?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
