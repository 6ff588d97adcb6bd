mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn products_can_be_created_and_listed() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Padma Furnishings", "B.N. Reddy").await;
    let provider_id = provider["id"].as_i64().expect("provider id");

    let product = app
        .seed_product(provider_id, "Sheesham 3-Seater Sofa", "32000")
        .await;
    assert_eq!(product["name"], "Sheesham 3-Seater Sofa");
    assert_eq!(product["price"], "32000");
    assert_eq!(product["inStock"], true);

    let response = app.request(Method::GET, "/api/furniture-products", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let products = TestApp::read_json(response).await;
    assert_eq!(products.as_array().map(Vec::len), Some(1));
    assert_eq!(products[0]["name"], "Sheesham 3-Seater Sofa");
}

#[tokio::test]
async fn product_listing_filters_by_category_and_provider() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Padma Furnishings", "B.N. Reddy").await;
    let other = app.seed_provider("Anand Wood Works", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");
    let other_id = other["id"].as_i64().expect("provider id");

    app.seed_product(provider_id, "Sheesham 3-Seater Sofa", "32000")
        .await;
    let response = app
        .request_authenticated(
            Method::POST,
            "/api/furniture-products",
            Some(json!({
                "providerId": other_id,
                "name": "6-Door Wardrobe",
                "category": "wardrobe",
                "price": "54000",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let by_category = app
        .request(Method::GET, "/api/furniture-products?category=wardrobe", None)
        .await;
    let products = TestApp::read_json(by_category).await;
    assert_eq!(products.as_array().map(Vec::len), Some(1));
    assert_eq!(products[0]["name"], "6-Door Wardrobe");

    let by_provider = app
        .request(
            Method::GET,
            &format!("/api/furniture-products?providerId={provider_id}"),
            None,
        )
        .await;
    let products = TestApp::read_json(by_provider).await;
    assert_eq!(products.as_array().map(Vec::len), Some(1));
    assert_eq!(products[0]["name"], "Sheesham 3-Seater Sofa");
}

#[tokio::test]
async fn unknown_products_return_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::GET, "/api/furniture-products/9999", None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stock_and_discounts_can_be_updated() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Padma Furnishings", "B.N. Reddy").await;
    let provider_id = provider["id"].as_i64().expect("provider id");
    let product = app
        .seed_product(provider_id, "Teak Dining Table", "78000")
        .await;
    let id = product["id"].as_i64().expect("product id");

    let response = app
        .request_authenticated(
            Method::PUT,
            &format!("/api/furniture-products/{id}"),
            Some(json!({
                "discountPrice": "72000",
                "inStock": false,
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = TestApp::read_json(response).await;
    assert_eq!(updated["discountPrice"], "72000");
    assert_eq!(updated["inStock"], false);
    assert_eq!(updated["price"], "78000");
}

#[tokio::test]
async fn creating_a_product_requires_auth() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/furniture-products",
            Some(json!({
                "name": "Queen Size Cot",
                "category": "bed",
                "price": "26500",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn products_require_a_category() {
    let app = TestApp::new().await;
    app.ensure_demo_user().await;

    let response = app
        .request_authenticated(
            Method::POST,
            "/api/furniture-products",
            Some(json!({
                "name": "Queen Size Cot",
                "category": "",
                "price": "26500",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
