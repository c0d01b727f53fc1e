use std::{collections::BTreeMap, time::Duration};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;

pub const DEFAULT_NUM_ITINERARIES: u32 = 5;
pub const MAX_NUM_ITINERARIES: u32 = 100;
pub const DEFAULT_MODES: &str = "WALK,TRANSIT";

/// Typed view of the query parameters the mock actually interprets. Every
/// other parameter is only echoed back.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanParams {
    pub from_place: String,
    pub to_place: String,
    pub num_itineraries: Option<u32>,
    pub mode: Option<String>,
    pub arrive_by: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Clone, Default)]
pub struct AppState {
    pub latency: Duration,
}

pub fn app() -> Router {
    app_with_latency(Duration::ZERO)
}

/// Same routes as `app`, but every plan response is delayed by `latency`.
pub fn app_with_latency(latency: Duration) -> Router {
    Router::new()
        .route("/api/v1/plan", get(plan))
        .with_state(AppState { latency })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_latency(listener, Duration::ZERO).await
}

pub async fn run_with_latency(listener: TcpListener, latency: Duration) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_latency(latency)).await
}

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorBody>)>;

fn reject(status: StatusCode, error: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (status, Json(ErrorBody { error: error.into() }))
}

async fn plan(
    State(state): State<AppState>,
    Query(raw): Query<BTreeMap<String, String>>,
    Query(params): Query<PlanParams>,
) -> ApiResult<Json<Value>> {
    if !state.latency.is_zero() {
        tokio::time::sleep(state.latency).await;
    }

    let from = place_json(&params.from_place)?;
    let to = place_json(&params.to_place)?;

    let count = params.num_itineraries.unwrap_or(DEFAULT_NUM_ITINERARIES);
    if count == 0 {
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            "numItineraries must be positive",
        ));
    }
    if count > MAX_NUM_ITINERARIES {
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("numItineraries must be at most {MAX_NUM_ITINERARIES}"),
        ));
    }

    let modes: Vec<&str> = params
        .mode
        .as_deref()
        .unwrap_or(DEFAULT_MODES)
        .split(',')
        .filter(|m| !m.is_empty())
        .collect();

    let itineraries: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "id": Uuid::new_v4(),
                "index": index,
                "modes": modes,
                "transfers": 0,
            })
        })
        .collect();

    info!(
        from = %params.from_place,
        to = %params.to_place,
        itineraries = count,
        arrive_by = params.arrive_by.unwrap_or(false),
        "plan request"
    );

    Ok(Json(json!({
        "requestParameters": raw,
        "from": from,
        "to": to,
        "itineraries": itineraries,
        "nextPageCursor": Uuid::new_v4().to_string(),
        "previousPageCursor": Uuid::new_v4().to_string(),
    })))
}

/// Coordinates if the place contains a comma, otherwise a stop id.
fn place_json(place: &str) -> ApiResult<Value> {
    if !place.contains(',') {
        return Ok(json!({ "stopId": place }));
    }
    let parts: Result<Vec<f64>, _> = place.split(',').map(|p| p.trim().parse::<f64>()).collect();
    match parts.as_deref() {
        Ok([lat, lon]) => Ok(json!({ "lat": lat, "lon": lon })),
        Ok([lat, lon, level]) => Ok(json!({ "lat": lat, "lon": lon, "level": level })),
        _ => Err(reject(
            StatusCode::BAD_REQUEST,
            format!("invalid place {place:?}: expected lat,lon[,level] or a stop id"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_ids_pass_through() {
        assert_eq!(place_json("stop:123").unwrap(), json!({"stopId": "stop:123"}));
    }

    #[test]
    fn coordinates_are_parsed() {
        assert_eq!(
            place_json("10.0,20.0").unwrap(),
            json!({"lat": 10.0, "lon": 20.0})
        );
        assert_eq!(
            place_json("50.1, 8.6, -1").unwrap(),
            json!({"lat": 50.1, "lon": 8.6, "level": -1.0})
        );
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        let (status, body) = place_json("10.0,north").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("10.0,north"));

        let (status, _) = place_json("1,2,3,4").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn params_require_both_places() {
        let result: Result<PlanParams, _> = serde_json::from_value(json!({"fromPlace": "A"}));
        assert!(result.is_err());
    }

    #[test]
    fn params_optional_fields_default_to_none() {
        let params: PlanParams =
            serde_json::from_value(json!({"fromPlace": "A", "toPlace": "B"})).unwrap();
        assert!(params.num_itineraries.is_none());
        assert!(params.mode.is_none());
        assert!(params.arrive_by.is_none());
    }
}
