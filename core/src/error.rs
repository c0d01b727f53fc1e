//! Error type for the plan API client.
//!
//! # Design
//! A single `ApiError` type covers every way a `plan` call can fail. Callers
//! that only care about "did it work" match on `Result`; callers that need to
//! diagnose a failure read `status()` and `body()`. Cancellation is not an
//! error and never produces an `ApiError`.

use thiserror::Error;

/// Errors returned by `PlanClient`, `Transport` implementations and `PlanApi`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be combined with the endpoint path.
    #[error("invalid base URL {base_url:?}: {message}")]
    InvalidUrl { base_url: String, message: String },

    /// The request never produced an HTTP response (connect failure, timeout,
    /// unreadable body).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx response body could not be decoded as JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// Client configuration could not be read.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a non-2xx response.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
