//! Async entry point: one `plan` call per request.
//!
//! `PlanApi` ties a `PlanClient` to a `Transport`. Each `plan` call builds the
//! request, executes it, and parses the response inside a `CancelablePlan`.
//! Concurrent calls share only the immutable client and transport.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cancel::CancelablePlan;
use crate::client::PlanClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::PlanRequest;

#[derive(Clone)]
pub struct PlanApi {
    client: PlanClient,
    transport: Arc<dyn Transport>,
}

impl PlanApi {
    /// Client over `reqwest` with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(PlanClient::from_config(&config), transport))
    }

    pub fn with_transport(client: PlanClient, transport: impl Transport + 'static) -> Self {
        Self {
            client,
            transport: Arc::new(transport),
        }
    }

    pub fn client(&self) -> &PlanClient {
        &self.client
    }

    /// Compute connections from `request.from_place` to `request.to_place`.
    ///
    /// Resolves to `None` if canceled before completion; otherwise to the
    /// parsed plan or the `ApiError` that prevented it. No retries.
    pub fn plan(&self, request: PlanRequest) -> CancelablePlan {
        let client = self.client.clone();
        let transport = Arc::clone(&self.transport);
        CancelablePlan::new(async move {
            let http_request = client.build_plan(&request)?;
            debug!(url = %http_request.url, "issuing plan request");
            let response = transport.execute(http_request).await.map_err(|e| {
                warn!(error = %e, "plan request failed");
                e
            })?;
            if !response.is_success() {
                warn!(status = response.status, "plan request returned non-success status");
            }
            client.parse_plan(response)
        })
    }
}

impl std::fmt::Debug for PlanApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanApi")
            .field("base_url", &self.client.base_url())
            .finish_non_exhaustive()
    }
}
