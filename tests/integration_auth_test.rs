mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use ibuildz_api::entities::user;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

#[tokio::test]
async fn auth_user_requires_the_demo_header() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/auth/user", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = TestApp::read_json(response).await;
    assert_eq!(body, json!({ "message": "Unauthorized" }));
}

#[tokio::test]
async fn a_non_true_flag_is_still_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request_with_headers(
            Method::GET,
            "/api/auth/user",
            None,
            &[("x-demo-authenticated", "yes")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn auth_user_upserts_and_returns_the_demo_account() {
    let app = TestApp::new().await;

    let response = app
        .request_authenticated(Method::GET, "/api/auth/user", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestApp::read_json(response).await;
    assert_eq!(body["id"], "demo-user-id");
    assert_eq!(body["email"], "user@demo.com");
    assert_eq!(body["firstName"], "Demo");
    assert_eq!(body["lastName"], "User");
    assert_eq!(body["role"], "user");

    let rows = user::Entity::find()
        .count(&*app.state.db)
        .await
        .expect("count users");
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn repeated_logins_reuse_the_same_row() {
    let app = TestApp::new().await;

    for _ in 0..3 {
        let response = app
            .request_authenticated(Method::GET, "/api/auth/user", None)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rows = user::Entity::find()
        .count(&*app.state.db)
        .await
        .expect("count users");
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn the_user_type_header_selects_the_role() {
    let app = TestApp::new().await;

    let response = app
        .request_with_headers(
            Method::GET,
            "/api/auth/user",
            None,
            &[
                ("x-demo-authenticated", "true"),
                ("x-demo-user-type", "merchant"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestApp::read_json(response).await;
    assert_eq!(body["role"], "merchant");
}

#[tokio::test]
async fn unknown_user_types_fall_back_to_the_customer_role() {
    let app = TestApp::new().await;

    let response = app
        .request_with_headers(
            Method::GET,
            "/api/auth/user",
            None,
            &[
                ("x-demo-authenticated", "true"),
                ("x-demo-user-type", "wizard"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestApp::read_json(response).await;
    assert_eq!(body["role"], "user");
}
