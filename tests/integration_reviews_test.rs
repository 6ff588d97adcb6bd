mod common;

use assert_matches::assert_matches;
use axum::http::{Method, StatusCode};
use common::TestApp;
use ibuildz_api::{errors::ServiceError, services::reviews::CreateReviewInput};
use serde_json::json;

#[tokio::test]
async fn creating_a_review_requires_auth() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/reviews",
            Some(json!({ "providerId": 1, "rating": 5 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reviews_recompute_the_provider_aggregate() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");
    assert_eq!(provider["rating"], "0");
    assert_eq!(provider["reviewCount"], 0);

    for (rating, comment) in [(5, "Solid work on our duplex"), (4, "మంచి పని")] {
        let response = app
            .request_authenticated(
                Method::POST,
                "/api/reviews",
                Some(json!({
                    "providerId": provider_id,
                    "rating": rating,
                    "comment": comment,
                })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .request(Method::GET, &format!("/api/service-providers/{provider_id}"), None)
        .await;
    let refreshed = TestApp::read_json(response).await;
    assert_eq!(refreshed["rating"], "4.50");
    assert_eq!(refreshed["reviewCount"], 2);
}

#[tokio::test]
async fn reviews_recompute_the_product_aggregate() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Padma Furnishings", "B.N. Reddy").await;
    let provider_id = provider["id"].as_i64().expect("provider id");
    let product = app
        .seed_product(provider_id, "Sheesham 3-Seater Sofa", "32000")
        .await;
    let product_id = product["id"].as_i64().expect("product id");

    let response = app
        .request_authenticated(
            Method::POST,
            "/api/reviews",
            Some(json!({ "productId": product_id, "rating": 3 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request(
            Method::GET,
            &format!("/api/furniture-products/{product_id}"),
            None,
        )
        .await;
    let refreshed = TestApp::read_json(response).await;
    assert_eq!(refreshed["rating"], "3.00");
    assert_eq!(refreshed["reviewCount"], 1);
}

#[tokio::test]
async fn a_review_must_name_a_target() {
    let app = TestApp::new().await;
    app.ensure_demo_user().await;

    let response = app
        .request_authenticated(Method::POST, "/api/reviews", Some(json!({ "rating": 5 })))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = TestApp::read_json(response).await;
    assert!(
        body["message"]
            .as_str()
            .expect("error message")
            .contains("must name"),
        "unexpected message: {}",
        body["message"]
    );

    let result = app
        .state
        .services
        .reviews
        .create_review(
            "demo-user-id",
            CreateReviewInput {
                provider_id: None,
                service_id: None,
                product_id: None,
                rating: 4,
                comment: None,
                comment_te: None,
            },
        )
        .await;
    assert_matches!(result, Err(ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn ratings_outside_the_scale_are_rejected() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");

    for rating in [0, 6] {
        let response = app
            .request_authenticated(
                Method::POST,
                "/api/reviews",
                Some(json!({ "providerId": provider_id, "rating": rating })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn review_listings_filter_by_target() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Sri Sai Builders", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");
    let product = app
        .seed_product(provider_id, "Teak Main Door", "65000")
        .await;
    let product_id = product["id"].as_i64().expect("product id");

    for body in [
        json!({ "providerId": provider_id, "rating": 5 }),
        json!({ "productId": product_id, "rating": 2 }),
    ] {
        let response = app
            .request_authenticated(Method::POST, "/api/reviews", Some(body))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let everything = app.request(Method::GET, "/api/reviews", None).await;
    let reviews = TestApp::read_json(everything).await;
    assert_eq!(reviews.as_array().map(Vec::len), Some(2));

    let by_provider = app
        .request(
            Method::GET,
            &format!("/api/reviews?providerId={provider_id}"),
            None,
        )
        .await;
    let reviews = TestApp::read_json(by_provider).await;
    assert_eq!(reviews.as_array().map(Vec::len), Some(1));
    assert_eq!(reviews[0]["rating"], 5);

    let by_product = app
        .request(
            Method::GET,
            &format!("/api/reviews?productId={product_id}"),
            None,
        )
        .await;
    let reviews = TestApp::read_json(by_product).await;
    assert_eq!(reviews.as_array().map(Vec::len), Some(1));
    assert_eq!(reviews[0]["rating"], 2);
}
