//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data.
//! `PlanClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. Whoever executes the round-trip (a
//! `Transport`, or a caller with its own HTTP stack) sits between the two.

use url::Url;

/// HTTP method for a request. The plan endpoint is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already carries the encoded query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Encoded query string without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// Decoded query pairs in the order they appear on the wire.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

/// An HTTP response described as plain data.
///
/// Non-2xx statuses are carried here like any other; interpreting them is the
/// parser's job.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
