//! Typed client for a trip-planning service's `GET /api/v1/plan` endpoint.
//!
//! # Overview
//! `PlanClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `PlanApi` pairs it
//! with a `Transport` and exposes `plan`, which returns a `CancelablePlan`
//! future.
//!
//! # Design
//! - `PlanClient` is stateless; it holds only the base URL and fixed headers.
//! - Configuration is an explicit `ClientConfig` value, resolved once and
//!   passed in. There is no global client state.
//! - Unset request fields never reach the wire; server defaults apply.
//! - `PlanResponse` is opaque JSON. Only the pagination fields are read.

pub mod api;
pub mod cancel;
pub mod client;
pub mod config;
pub mod datetime;
pub mod error;
pub mod http;
pub mod mode;
pub mod place;
pub mod transport;
pub mod types;

pub use api::PlanApi;
pub use cancel::{CancelHandle, CancelablePlan};
pub use client::{PlanClient, PLAN_PATH};
pub use config::ClientConfig;
pub use datetime::{parse_clock_time, parse_plan_date};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use mode::{parse_modes, Mode, UnknownMode};
pub use place::Place;
pub use transport::{ReqwestTransport, Transport};
pub use types::{PlanRequest, PlanResponse};
