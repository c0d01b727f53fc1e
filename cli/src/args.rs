use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use plan_core::{parse_clock_time, parse_modes, parse_plan_date, ClientConfig, Mode, PlanRequest};

/// Query a trip-planning server for connections between two places.
#[derive(Debug, Parser)]
#[command(name = "plan", version)]
pub struct Args {
    /// Server base URL (overrides PLAN_API_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token (overrides PLAN_API_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Request timeout in seconds (overrides PLAN_API_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Origin: "lat,lon[,level]" or a stop id
    #[arg(long = "from")]
    pub from_place: String,

    /// Destination: "lat,lon[,level]" or a stop id
    #[arg(long = "to")]
    pub to_place: String,

    /// MM-DD-YYYY or YYYY-MM-DD
    #[arg(long, value_parser = parse_plan_date)]
    pub date: Option<NaiveDate>,

    /// 19:06 or 7:06pm
    #[arg(long, value_parser = parse_clock_time)]
    pub time: Option<NaiveTime>,

    #[arg(long)]
    pub max_transfers: Option<u32>,

    #[arg(long)]
    pub max_hours: Option<f64>,

    /// Seconds
    #[arg(long)]
    pub min_transfer_time: Option<u64>,

    #[arg(long)]
    pub transfer_time_factor: Option<f64>,

    #[arg(long)]
    pub wheelchair: Option<bool>,

    /// Comma-separated, e.g. WALK,TRANSIT
    // Qualified path: one flag value parses into the whole list.
    #[arg(long, value_parser = parse_modes)]
    pub mode: Option<std::vec::Vec<Mode>>,

    #[arg(long)]
    pub num_itineraries: Option<u32>,

    #[arg(long)]
    pub page_cursor: Option<String>,

    #[arg(long)]
    pub timetable_view: Option<bool>,

    #[arg(long)]
    pub arrive_by: Option<bool>,

    /// Seconds
    #[arg(long)]
    pub search_window: Option<u64>,

    /// Seconds
    #[arg(long)]
    pub max_pre_transit_time: Option<u64>,

    /// Seconds
    #[arg(long)]
    pub max_post_transit_time: Option<u64>,
}

impl Args {
    /// Flags win over whatever `base` was resolved from the environment.
    pub fn client_config(&self, base: ClientConfig) -> ClientConfig {
        let mut config = base;
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(token) = &self.token {
            config = config.with_token(token.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    pub fn plan_request(&self) -> PlanRequest {
        PlanRequest {
            date: self.date,
            time: self.time,
            max_transfers: self.max_transfers,
            max_hours: self.max_hours,
            min_transfer_time: self.min_transfer_time.map(Duration::from_secs),
            transfer_time_factor: self.transfer_time_factor,
            wheelchair: self.wheelchair,
            mode: self.mode.clone(),
            num_itineraries: self.num_itineraries,
            page_cursor: self.page_cursor.clone(),
            timetable_view: self.timetable_view,
            arrive_by: self.arrive_by,
            search_window: self.search_window.map(Duration::from_secs),
            max_pre_transit_time: self.max_pre_transit_time.map(Duration::from_secs),
            max_post_transit_time: self.max_post_transit_time.map(Duration::from_secs),
            ..PlanRequest::new(self.from_place.as_str(), self.to_place.as_str())
        }
    }
}
