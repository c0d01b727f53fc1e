//! Request parameters and response payload of the plan endpoint.
//!
//! # Design
//! `PlanRequest` mirrors the endpoint's query parameters one field per
//! parameter. Only `from_place` and `to_place` are required; every other
//! field is `None` unless the caller sets it, and `None` fields never reach the
//! wire. Server-side defaults (`mode=WALK,TRANSIT`, `numItineraries=5`,
//! `searchWindow=7200`, ...) are therefore applied by the server, not here.
//!
//! No value is validated client-side. A `max_hours` too low to reach the
//! destination is the server's problem to report.
//!
//! `PlanResponse` is the routing result as the server sends it. Its schema
//! belongs to the server; the accessors below only read the pagination fields.

use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::datetime::{format_date, format_time};
use crate::mode::{join_modes, Mode};
use crate::place::Place;

/// Query parameters of `GET /api/v1/plan`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub from_place: Place,
    pub to_place: Place,
    /// Departure date (`arrive_by = false`) or arrival date (`arrive_by = true`).
    pub date: Option<NaiveDate>,
    /// Departure or arrival time, depending on `arrive_by`. Sent as `HH:MM`;
    /// seconds and fractions are dropped.
    pub time: Option<NaiveTime>,
    pub max_transfers: Option<u32>,
    pub max_hours: Option<f64>,
    pub min_transfer_time: Option<Duration>,
    pub transfer_time_factor: Option<f64>,
    pub wheelchair: Option<bool>,
    pub mode: Option<Vec<Mode>>,
    /// Minimum number of itineraries; only meaningful with `timetable_view`.
    pub num_itineraries: Option<u32>,
    /// Cursor copied from a previous response to fetch the next or previous
    /// time window. The rest of the request must stay unchanged.
    pub page_cursor: Option<String>,
    pub timetable_view: Option<bool>,
    pub arrive_by: Option<bool>,
    pub search_window: Option<Duration>,
    /// Maximum duration of the first street leg.
    pub max_pre_transit_time: Option<Duration>,
    /// Maximum duration of the last street leg.
    pub max_post_transit_time: Option<Duration>,
}

impl PlanRequest {
    pub fn new(from_place: impl Into<Place>, to_place: impl Into<Place>) -> Self {
        Self {
            from_place: from_place.into(),
            to_place: to_place.into(),
            date: None,
            time: None,
            max_transfers: None,
            max_hours: None,
            min_transfer_time: None,
            transfer_time_factor: None,
            wheelchair: None,
            mode: None,
            num_itineraries: None,
            page_cursor: None,
            timetable_view: None,
            arrive_by: None,
            search_window: None,
            max_pre_transit_time: None,
            max_post_transit_time: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_max_transfers(mut self, n: u32) -> Self {
        self.max_transfers = Some(n);
        self
    }

    pub fn with_max_hours(mut self, hours: f64) -> Self {
        self.max_hours = Some(hours);
        self
    }

    pub fn with_min_transfer_time(mut self, d: Duration) -> Self {
        self.min_transfer_time = Some(d);
        self
    }

    pub fn with_transfer_time_factor(mut self, factor: f64) -> Self {
        self.transfer_time_factor = Some(factor);
        self
    }

    pub fn with_wheelchair(mut self, wheelchair: bool) -> Self {
        self.wheelchair = Some(wheelchair);
        self
    }

    pub fn with_mode(mut self, modes: impl IntoIterator<Item = Mode>) -> Self {
        self.mode = Some(modes.into_iter().collect());
        self
    }

    pub fn with_num_itineraries(mut self, n: u32) -> Self {
        self.num_itineraries = Some(n);
        self
    }

    pub fn with_page_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.page_cursor = Some(cursor.into());
        self
    }

    pub fn with_timetable_view(mut self, timetable_view: bool) -> Self {
        self.timetable_view = Some(timetable_view);
        self
    }

    pub fn with_arrive_by(mut self, arrive_by: bool) -> Self {
        self.arrive_by = Some(arrive_by);
        self
    }

    pub fn with_search_window(mut self, d: Duration) -> Self {
        self.search_window = Some(d);
        self
    }

    pub fn with_max_pre_transit_time(mut self, d: Duration) -> Self {
        self.max_pre_transit_time = Some(d);
        self
    }

    pub fn with_max_post_transit_time(mut self, d: Duration) -> Self {
        self.max_post_transit_time = Some(d);
        self
    }

    /// Query pairs for every defined field, unencoded.
    ///
    /// The two places come first; the optional fields follow sorted by wire
    /// name, so the output is deterministic for a given request.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("fromPlace", self.from_place.to_string()),
            ("toPlace", self.to_place.to_string()),
        ];

        let optional = [
            ("arriveBy", self.arrive_by.map(|v| v.to_string())),
            ("date", self.date.map(format_date)),
            ("maxHours", self.max_hours.map(|v| v.to_string())),
            ("maxPostTransitTime", self.max_post_transit_time.map(secs)),
            ("maxPreTransitTime", self.max_pre_transit_time.map(secs)),
            ("maxTransfers", self.max_transfers.map(|v| v.to_string())),
            ("minTransferTime", self.min_transfer_time.map(secs)),
            ("mode", self.mode.as_deref().map(join_modes)),
            ("numItineraries", self.num_itineraries.map(|v| v.to_string())),
            ("pageCursor", self.page_cursor.clone()),
            ("searchWindow", self.search_window.map(secs)),
            ("time", self.time.map(format_time)),
            ("timetableView", self.timetable_view.map(|v| v.to_string())),
            ("transferTimeFactor", self.transfer_time_factor.map(|v| v.to_string())),
            ("wheelchair", self.wheelchair.map(|v| v.to_string())),
        ];
        pairs.extend(
            optional
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v))),
        );
        pairs
    }
}

fn secs(d: Duration) -> String {
    d.as_secs().to_string()
}

/// Routing result returned by the plan endpoint.
///
/// The payload is kept as the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanResponse(Value);

impl PlanResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Itineraries in server order. Empty if the field is missing.
    pub fn itineraries(&self) -> &[Value] {
        self.0
            .get("itineraries")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Cursor for the next (later) time window.
    pub fn next_page_cursor(&self) -> Option<&str> {
        self.0.get("nextPageCursor").and_then(Value::as_str)
    }

    /// Cursor for the previous (earlier) time window.
    pub fn previous_page_cursor(&self) -> Option<&str> {
        self.0.get("previousPageCursor").and_then(Value::as_str)
    }
}
