mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn services_can_be_created_and_listed() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");

    let service = app.seed_service(provider_id, "Duplex House Construction").await;
    assert_eq!(service["title"], "Duplex House Construction");
    assert_eq!(service["priceUnit"], "per_sqft");
    assert_eq!(service["price"], "1500");
    assert_eq!(service["isActive"], true);

    let response = app.request(Method::GET, "/api/services", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let services = TestApp::read_json(response).await;
    assert_eq!(services.as_array().map(Vec::len), Some(1));
    assert_eq!(services[0]["title"], "Duplex House Construction");
}

#[tokio::test]
async fn service_listing_filters_by_provider_and_category() {
    let app = TestApp::new().await;
    let category = app.seed_category("Construction").await;
    let category_id = category["id"].as_i64().expect("category id");
    let first = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let second = app.seed_provider("Venkat Plumbing Works", "B.N. Reddy").await;
    let first_id = first["id"].as_i64().expect("provider id");
    let second_id = second["id"].as_i64().expect("provider id");

    let response = app
        .request_authenticated(
            Method::POST,
            "/api/services",
            Some(json!({
                "providerId": first_id,
                "categoryId": category_id,
                "title": "Duplex House Construction",
                "price": "1850",
                "priceUnit": "per_sqft",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    app.seed_service(second_id, "Bathroom Plumbing Renovation").await;

    let by_provider = app
        .request(
            Method::GET,
            &format!("/api/services?providerId={second_id}"),
            None,
        )
        .await;
    let services = TestApp::read_json(by_provider).await;
    assert_eq!(services.as_array().map(Vec::len), Some(1));
    assert_eq!(services[0]["title"], "Bathroom Plumbing Renovation");

    let by_category = app
        .request(
            Method::GET,
            &format!("/api/services?categoryId={category_id}"),
            None,
        )
        .await;
    let services = TestApp::read_json(by_category).await;
    assert_eq!(services.as_array().map(Vec::len), Some(1));
    assert_eq!(services[0]["title"], "Duplex House Construction");
}

#[tokio::test]
async fn unknown_services_return_not_found() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/services/9999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn service_prices_can_be_updated() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");
    let service = app.seed_service(provider_id, "Duplex House Construction").await;
    let id = service["id"].as_i64().expect("service id");

    let response = app
        .request_authenticated(
            Method::PUT,
            &format!("/api/services/{id}"),
            Some(json!({ "price": "1850" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = TestApp::read_json(response).await;
    assert_eq!(updated["price"], "1850");
    assert_eq!(updated["title"], "Duplex House Construction");
}

#[tokio::test]
async fn creating_a_service_requires_auth() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/services",
            Some(json!({ "title": "Duplex House Construction" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn blank_titles_are_rejected() {
    let app = TestApp::new().await;
    app.ensure_demo_user().await;

    let response = app
        .request_authenticated(
            Method::POST,
            "/api/services",
            Some(json!({ "title": "" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
