use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, ErrorBody, MAX_NUM_ITINERARIES};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- success ---

#[tokio::test]
async fn plan_with_places_only_returns_default_itineraries() {
    let resp = app()
        .oneshot(get("/api/v1/plan?fromPlace=10.0%2C20.0&toPlace=stop%3A123"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let plan: Value = body_json(resp).await;
    assert_eq!(plan["itineraries"].as_array().unwrap().len(), 5);
    assert_eq!(plan["from"]["lat"], 10.0);
    assert_eq!(plan["from"]["lon"], 20.0);
    assert_eq!(plan["to"]["stopId"], "stop:123");
    assert_eq!(plan["itineraries"][0]["modes"], serde_json::json!(["WALK", "TRANSIT"]));
}

#[tokio::test]
async fn plan_echoes_request_parameters() {
    let resp = app()
        .oneshot(get("/api/v1/plan?fromPlace=A&toPlace=B&arriveBy=true&numItineraries=3"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let plan: Value = body_json(resp).await;
    assert_eq!(
        plan["requestParameters"],
        serde_json::json!({
            "fromPlace": "A",
            "toPlace": "B",
            "arriveBy": "true",
            "numItineraries": "3",
        })
    );
    assert_eq!(plan["itineraries"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn plan_honors_mode_list() {
    let resp = app()
        .oneshot(get("/api/v1/plan?fromPlace=A&toPlace=B&mode=BIKE%2CRAIL&numItineraries=1"))
        .await
        .unwrap();

    let plan: Value = body_json(resp).await;
    assert_eq!(plan["itineraries"][0]["modes"], serde_json::json!(["BIKE", "RAIL"]));
}

#[tokio::test]
async fn plan_returns_fresh_page_cursors() {
    let resp = app()
        .oneshot(get("/api/v1/plan?fromPlace=A&toPlace=B"))
        .await
        .unwrap();

    let plan: Value = body_json(resp).await;
    let next = plan["nextPageCursor"].as_str().unwrap();
    let prev = plan["previousPageCursor"].as_str().unwrap();
    assert!(!next.is_empty());
    assert_ne!(next, prev);
}

// --- errors ---

#[tokio::test]
async fn plan_without_to_place_returns_400() {
    let resp = app()
        .oneshot(get("/api/v1/plan?fromPlace=A"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn plan_with_malformed_coordinates_returns_400() {
    let resp = app()
        .oneshot(get("/api/v1/plan?fromPlace=1%2Cx&toPlace=B"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: ErrorBody = body_json(resp).await;
    assert!(err.error.contains("invalid place"));
}

#[tokio::test]
async fn plan_with_zero_itineraries_returns_422() {
    let resp = app()
        .oneshot(get("/api/v1/plan?fromPlace=A&toPlace=B&numItineraries=0"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.error, "numItineraries must be positive");
}

#[tokio::test]
async fn plan_with_huge_itinerary_count_returns_422() {
    let resp = app()
        .oneshot(get("/api/v1/plan?fromPlace=A&toPlace=B&numItineraries=4294967295"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let err: ErrorBody = body_json(resp).await;
    assert_eq!(err.error, "numItineraries must be at most 100");
}

#[tokio::test]
async fn plan_at_itinerary_cap_is_served() {
    let uri = format!("/api/v1/plan?fromPlace=A&toPlace=B&numItineraries={MAX_NUM_ITINERARIES}");
    let resp = app().oneshot(get(&uri)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let plan: Value = body_json(resp).await;
    assert_eq!(plan["itineraries"].as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn plan_rejects_non_numeric_itinerary_count() {
    let resp = app()
        .oneshot(get("/api/v1/plan?fromPlace=A&toPlace=B&numItineraries=many"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_is_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/plan?fromPlace=A&toPlace=B")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app().oneshot(get("/api/v2/plan")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}
