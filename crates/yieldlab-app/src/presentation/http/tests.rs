use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use super::build_router;
use crate::presentation::bootstrap::build_app_state;
use yieldlab_infrastructure::config::ServerConfig;

async fn app() -> Router {
    let state = build_app_state(&ServerConfig::default()).await.unwrap();
    build_router(Arc::new(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_scenario_lifecycle() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/scenarios", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/scenarios",
        Some(json!({
            "name": "Referral ten",
            "calculatorType": "referral",
            "input": { "downlineUnitCount": 10, "dailyRatePercent": 1.25 },
            "notes": "first try"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], json!("Referral ten"));
    assert_eq!(created["calculatorType"], json!("referral"));
    assert_eq!(created["notes"], json!("first try"));
    assert!((created["result"]["directDailyReward"].as_f64().unwrap() - 2.5).abs() < 1e-9);

    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/api/scenarios/{id}");

    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, list) = send(&app, Method::GET, "/api/scenarios", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&id));

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_scenario_rejections() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/scenarios",
        Some(json!({ "name": "", "calculatorType": "investment", "input": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // Missing required field: axum rejects before the handler runs
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/scenarios",
        Some(json!({ "name": "No type" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/scenarios",
        Some(json!({
            "name": "Gold team",
            "calculatorType": "team",
            "input": {
                "currentTier": "Gold",
                "smallAreaPerformanceUnits": 100,
                "totalPerformanceUnits": 100,
                "dailyRatePercent": 1.0
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, Method::GET, "/api/scenarios", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_calculate_investment() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/calculate/investment",
        Some(json!({ "unitCount": 1, "productType": "long" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalReturn"], json!(180.0));
    assert_eq!(body["totalWithCapital"], json!(280.0));
    assert_eq!(body["dailyRecords"].as_array().unwrap().len(), 180);
    assert_eq!(body["dailyRecords"][99]["lockedAmount"], json!(0.0));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/calculate/investment",
        Some(json!({ "unitCount": 0, "productType": "short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Unit count"));
}

#[tokio::test]
async fn test_calculate_referral_and_team() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/calculate/referral",
        Some(json!({
            "downlineUnitCount": 10,
            "secondLevelUnitCount": 5,
            "dailyRatePercent": 1.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!((body["totalDailyReward"].as_f64().unwrap() - 2.5).abs() < 1e-9);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/calculate/team",
        Some(json!({
            "currentTier": "VIP",
            "smallAreaPerformanceUnits": 20,
            "totalPerformanceUnits": 40,
            "dailyRatePercent": 1.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tier"]["name"], json!("VIP"));
    assert_eq!(body["supremeReward"], json!(0.0));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/calculate/team",
        Some(json!({
            "currentTier": "Diamond",
            "smallAreaPerformanceUnits": 20,
            "totalPerformanceUnits": 40,
            "dailyRatePercent": 1.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid tier: Diamond"));
}

#[tokio::test]
async fn test_reference_tables() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/reference/release-schedule", None).await;
    assert_eq!(status, StatusCode::OK);
    let tasks: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["task"].as_u64().unwrap())
        .collect();
    assert_eq!(tasks, vec![20, 40, 60, 80, 100]);

    let (status, body) = send(&app, Method::GET, "/api/reference/tiers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 8);

    let (status, body) = send(&app, Method::GET, "/api/reference/tiers/Supreme", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isSupreme"], json!(true));

    let (status, body) = send(&app, Method::GET, "/api/reference/tiers/Bronze", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Bronze"));
}
