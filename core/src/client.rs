//! Stateless HTTP request builder and response parser for the plan endpoint.
//!
//! # Design
//! `PlanClient` holds the base URL and the per-request headers derived from
//! `ClientConfig`, and carries no mutable state between calls. `build_plan`
//! produces an `HttpRequest`; `parse_plan` consumes an `HttpResponse`. The
//! round-trip in between belongs to a `Transport` or to the caller, keeping
//! this part deterministic and free of I/O.

use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{PlanRequest, PlanResponse};

/// Path of the plan endpoint, relative to the base URL.
pub const PLAN_PATH: &str = "/api/v1/plan";

/// Synchronous, stateless client for the plan endpoint.
#[derive(Debug, Clone)]
pub struct PlanClient {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl PlanClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: Vec::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let mut client = Self::new(&config.base_url);
        if let Some(token) = &config.token {
            client
                .headers
                .push(("authorization".to_string(), format!("Bearer {token}")));
        }
        client.headers.extend(config.headers.iter().cloned());
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_plan(&self, request: &PlanRequest) -> Result<HttpRequest, ApiError> {
        let invalid = |message: String| ApiError::InvalidUrl {
            base_url: self.base_url.clone(),
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("base URL must not carry a query or fragment".to_string()));
        }
        url.path_segments_mut()
            .map_err(|_| invalid("base URL cannot be extended with a path".to_string()))?
            .pop_if_empty()
            .extend(PLAN_PATH.trim_start_matches('/').split('/'));
        url.query_pairs_mut().extend_pairs(request.query_pairs());

        Ok(HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: self.headers.clone(),
        })
    }

    pub fn parse_plan(&self, response: HttpResponse) -> Result<PlanResponse, ApiError> {
        check_status(&response)?;
        debug!(status = response.status, bytes = response.body.len(), "plan response received");
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Map any non-2xx status to `ApiError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
