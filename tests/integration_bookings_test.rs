mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn bookings_require_auth() {
    let app = TestApp::new().await;

    let listing = app.request(Method::GET, "/api/bookings", None).await;
    assert_eq!(listing.status(), StatusCode::UNAUTHORIZED);

    let creation = app
        .request(
            Method::POST,
            "/api/bookings",
            Some(json!({
                "customerName": "Srinivas",
                "customerPhone": "+91 98490 11111",
                "location": "L.B. Nagar",
            })),
        )
        .await;
    assert_eq!(creation.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn a_customer_can_book_a_provider() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");
    let service = app.seed_service(provider_id, "Duplex House Construction").await;
    let service_id = service["id"].as_i64().expect("service id");

    let response = app
        .request_authenticated(
            Method::POST,
            "/api/bookings",
            Some(json!({
                "serviceId": service_id,
                "providerId": provider_id,
                "scheduledDate": "2026-09-01T10:00:00Z",
                "customerName": "Srinivas",
                "customerPhone": "+91 98490 11111",
                "location": "L.B. Nagar",
                "notes": "Two floors, east facing plot",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let booking = TestApp::read_json(response).await;
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["userId"], "demo-user-id");
    assert_eq!(booking["providerId"], provider_id);
    assert_eq!(booking["customerName"], "Srinivas");
}

#[tokio::test]
async fn booking_lists_show_the_callers_requests() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");

    for name in ["Srinivas", "Bhavani"] {
        let response = app
            .request_authenticated(
                Method::POST,
                "/api/bookings",
                Some(json!({
                    "providerId": provider_id,
                    "customerName": name,
                    "customerPhone": "+91 98490 11111",
                    "location": "L.B. Nagar",
                })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listing = app.request_authenticated(Method::GET, "/api/bookings", None).await;
    assert_eq!(listing.status(), StatusCode::OK);

    let bookings = TestApp::read_json(listing).await;
    assert_eq!(bookings.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn the_provider_filter_switches_to_incoming_bookings() {
    let app = TestApp::new().await;
    let first = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let second = app.seed_provider("Venkat Plumbing Works", "B.N. Reddy").await;
    let first_id = first["id"].as_i64().expect("provider id");
    let second_id = second["id"].as_i64().expect("provider id");

    let response = app
        .request_authenticated(
            Method::POST,
            "/api/bookings",
            Some(json!({
                "providerId": first_id,
                "customerName": "Srinivas",
                "customerPhone": "+91 98490 11111",
                "location": "L.B. Nagar",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let incoming = app
        .request_authenticated(
            Method::GET,
            &format!("/api/bookings?providerId={first_id}"),
            None,
        )
        .await;
    let bookings = TestApp::read_json(incoming).await;
    assert_eq!(bookings.as_array().map(Vec::len), Some(1));

    let other = app
        .request_authenticated(
            Method::GET,
            &format!("/api/bookings?providerId={second_id}"),
            None,
        )
        .await;
    let bookings = TestApp::read_json(other).await;
    assert_eq!(bookings, json!([]));
}

#[tokio::test]
async fn booking_status_can_be_updated() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");

    let created = app
        .request_authenticated(
            Method::POST,
            "/api/bookings",
            Some(json!({
                "providerId": provider_id,
                "customerName": "Srinivas",
                "customerPhone": "+91 98490 11111",
                "location": "L.B. Nagar",
            })),
        )
        .await;
    let booking = TestApp::read_json(created).await;
    let id = booking["id"].as_i64().expect("booking id");

    let response = app
        .request_authenticated(
            Method::PUT,
            &format!("/api/bookings/{id}"),
            Some(json!({
                "status": "confirmed",
                "estimatedCost": "450000",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = TestApp::read_json(response).await;
    assert_eq!(updated["status"], "confirmed");
    assert_eq!(updated["estimatedCost"], "450000");
}

#[tokio::test]
async fn unknown_bookings_return_not_found() {
    let app = TestApp::new().await;
    app.ensure_demo_user().await;

    let response = app
        .request_authenticated(Method::GET, "/api/bookings/9999", None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bookings_validate_contact_details() {
    let app = TestApp::new().await;
    app.ensure_demo_user().await;

    let response = app
        .request_authenticated(
            Method::POST,
            "/api/bookings",
            Some(json!({
                "customerName": "",
                "customerPhone": "+91 98490 11111",
                "location": "L.B. Nagar",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = TestApp::read_json(response).await;
    assert_eq!(body["error"], "Bad Request");
}
