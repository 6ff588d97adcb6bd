mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn the_estimator_prices_a_standard_kitchen() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/cost-estimates",
            Some(json!({
                "roomType": "kitchen",
                "roomSize": 100,
                "serviceType": "interior_design",
                "qualityLevel": "standard",
                "location": "L.B. Nagar",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let estimate = TestApp::read_json(response).await;
    assert_eq!(estimate["materialCost"], "48000");
    assert_eq!(estimate["laborCost"], "32000");
    assert_eq!(estimate["totalCost"], "80000");
    assert_eq!(estimate["roomType"], "kitchen");
    assert_eq!(estimate["userId"], json!(null));
}

#[tokio::test]
async fn client_supplied_costs_are_ignored() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/cost-estimates",
            Some(json!({
                "roomType": "bedroom",
                "roomSize": 10,
                "serviceType": "interior_design",
                "qualityLevel": "budget",
                "materialCost": "1",
                "totalCost": "1",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let estimate = TestApp::read_json(response).await;
    assert_eq!(estimate["materialCost"], "1500");
    assert_eq!(estimate["laborCost"], "1000");
    assert_eq!(estimate["totalCost"], "2500");
}

#[tokio::test]
async fn authenticated_estimates_attach_the_caller() {
    let app = TestApp::new().await;
    app.ensure_demo_user().await;

    let response = app
        .request_authenticated(
            Method::POST,
            "/api/cost-estimates",
            Some(json!({
                "roomType": "living_room",
                "roomSize": 200,
                "serviceType": "complete_package",
                "qualityLevel": "premium",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let estimate = TestApp::read_json(response).await;
    assert_eq!(estimate["userId"], "demo-user-id");
}

#[tokio::test]
async fn unknown_room_types_fall_back_to_flat_pricing() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/cost-estimates",
            Some(json!({
                "roomType": "garage",
                "roomSize": 10,
                "serviceType": "landscaping",
                "qualityLevel": "standard",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let estimate = TestApp::read_json(response).await;
    assert_eq!(estimate["materialCost"], "2400");
    assert_eq!(estimate["laborCost"], "1600");
    assert_eq!(estimate["totalCost"], "4000");
}

#[tokio::test]
async fn estimates_validate_the_room_size() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/cost-estimates",
            Some(json!({
                "roomType": "kitchen",
                "roomSize": 0,
                "serviceType": "interior_design",
                "qualityLevel": "standard",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn estimate_history_requires_auth() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/cost-estimates", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn estimate_history_lists_the_callers_estimates() {
    let app = TestApp::new().await;
    app.ensure_demo_user().await;

    // One anonymous estimate that must stay out of the history.
    let anonymous = app
        .request(
            Method::POST,
            "/api/cost-estimates",
            Some(json!({
                "roomType": "bathroom",
                "roomSize": 40,
                "serviceType": "interior_design",
                "qualityLevel": "budget",
            })),
        )
        .await;
    assert_eq!(anonymous.status(), StatusCode::CREATED);

    let owned = app
        .request_authenticated(
            Method::POST,
            "/api/cost-estimates",
            Some(json!({
                "roomType": "kitchen",
                "roomSize": 120,
                "serviceType": "furniture",
                "qualityLevel": "premium",
            })),
        )
        .await;
    assert_eq!(owned.status(), StatusCode::CREATED);

    let history = app
        .request_authenticated(Method::GET, "/api/cost-estimates", None)
        .await;
    assert_eq!(history.status(), StatusCode::OK);

    let estimates = TestApp::read_json(history).await;
    assert_eq!(estimates.as_array().map(Vec::len), Some(1));
    assert_eq!(estimates[0]["roomType"], "kitchen");
    assert_eq!(estimates[0]["userId"], "demo-user-id");
}
