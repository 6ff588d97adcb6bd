mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn payment_intents_require_auth() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/create-payment-intent",
            Some(json!({ "amount": "499.50" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = TestApp::read_json(response).await;
    assert_eq!(body, json!({ "message": "Unauthorized" }));
}

#[tokio::test]
async fn payment_intents_return_the_demo_secret() {
    let app = TestApp::new().await;

    let response = app
        .request_authenticated(
            Method::POST,
            "/api/create-payment-intent",
            Some(json!({ "amount": "499.50" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestApp::read_json(response).await;
    assert_eq!(body, json!({ "clientSecret": "demo_client_secret" }));
}

#[tokio::test]
async fn non_positive_amounts_are_rejected() {
    let app = TestApp::new().await;

    for amount in ["0", "-5"] {
        let response = app
            .request_authenticated(
                Method::POST,
                "/api/create-payment-intent",
                Some(json!({ "amount": amount })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "amount: {amount}");
    }
}
