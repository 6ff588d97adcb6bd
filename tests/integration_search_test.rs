mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn search_requires_a_query() {
    let app = TestApp::new().await;

    for uri in [
        "/api/search/services",
        "/api/search/services?q=%20",
        "/api/search/furniture",
    ] {
        let response = app.request(Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");

        let body = TestApp::read_json(response).await;
        assert!(
            body["message"]
                .as_str()
                .expect("error message")
                .contains("Query parameter q is required"),
            "unexpected message: {}",
            body["message"]
        );
    }
}

#[tokio::test]
async fn service_search_matches_case_insensitively() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Lakshmi Interiors", "L.B. Nagar").await;
    let provider_id = provider["id"].as_i64().expect("provider id");
    app.seed_service(provider_id, "Modular Kitchen Package").await;
    app.seed_service(provider_id, "False Ceiling with LED").await;

    let response = app
        .request(Method::GET, "/api/search/services?q=KITCHEN", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let results = TestApp::read_json(response).await;
    assert_eq!(results.as_array().map(Vec::len), Some(1));
    assert_eq!(results[0]["title"], "Modular Kitchen Package");

    let none = app
        .request(Method::GET, "/api/search/services?q=plumbing", None)
        .await;
    let results = TestApp::read_json(none).await;
    assert_eq!(results, json!([]));
}

#[tokio::test]
async fn service_search_narrows_by_location() {
    let app = TestApp::new().await;
    let near = app.seed_provider("Lakshmi Interiors", "L.B. Nagar").await;
    let far = app.seed_provider("Padma Furnishings", "B.N. Reddy").await;
    let near_id = near["id"].as_i64().expect("provider id");
    let far_id = far["id"].as_i64().expect("provider id");
    app.seed_service(near_id, "Modular Kitchen Package").await;
    app.seed_service(far_id, "Kitchen Chimney Installation").await;

    let everywhere = app
        .request(Method::GET, "/api/search/services?q=kitchen", None)
        .await;
    let results = TestApp::read_json(everywhere).await;
    assert_eq!(results.as_array().map(Vec::len), Some(2));

    let nearby = app
        .request(
            Method::GET,
            "/api/search/services?q=kitchen&location=L.B.%20Nagar",
            None,
        )
        .await;
    let results = TestApp::read_json(nearby).await;
    assert_eq!(results.as_array().map(Vec::len), Some(1));
    assert_eq!(results[0]["title"], "Modular Kitchen Package");
}

#[tokio::test]
async fn furniture_search_matches_product_names() {
    let app = TestApp::new().await;
    let provider = app.seed_provider("Padma Furnishings", "B.N. Reddy").await;
    let provider_id = provider["id"].as_i64().expect("provider id");
    app.seed_product(provider_id, "Sheesham 3-Seater Sofa", "32000")
        .await;
    app.seed_product(provider_id, "Carved Pooja Mandir", "18500")
        .await;

    let response = app
        .request(Method::GET, "/api/search/furniture?q=sofa", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let results = TestApp::read_json(response).await;
    assert_eq!(results.as_array().map(Vec::len), Some(1));
    assert_eq!(results[0]["name"], "Sheesham 3-Seater Sofa");

    let none = app
        .request(Method::GET, "/api/search/furniture?q=wardrobe", None)
        .await;
    let results = TestApp::read_json(none).await;
    assert_eq!(results, json!([]));
}
