mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;

#[tokio::test]
async fn root_endpoint_answers() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_endpoint_reports_database_state() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestApp::read_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn status_endpoint_reports_service_metadata() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/status", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestApp::read_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "ibuildz-api");
    assert_eq!(body["environment"], "test");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestApp::read_json(response).await;
    assert_eq!(body["info"]["title"], "iBuildz API");
    assert!(body["paths"]["/api/cost-estimates"].is_object());
}

#[tokio::test]
async fn unknown_routes_fall_through_to_404() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/does-not-exist", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
