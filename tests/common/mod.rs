// Each integration test binary pulls in this module and uses its own
// subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::sync::mpsc;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use ibuildz_api::{
    config::AppConfig,
    db,
    events::{self, EventSender},
    handlers::AppServices,
    AppState,
};

/// Helper harness for spinning up an application backed by a throwaway
/// SQLite database. Each instance owns its own temp directory so tests can
/// run in parallel without stepping on each other's files.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _db_dir: TempDir,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_dir = tempfile::tempdir().expect("create temp dir for test database");
        let db_path = db_dir.path().join("ibuildz_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            5000,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db_arc = Arc::new(pool);
        let (event_tx, event_rx) = mpsc::channel(64);
        let event_sender = Arc::new(EventSender::new(event_tx));
        let event_task = tokio::spawn(events::process_events(event_rx));

        let services = AppServices::new(db_arc.clone(), event_sender.clone());

        let state = AppState {
            db: db_arc,
            config: Arc::new(cfg),
            event_sender,
            services,
        };

        let router = ibuildz_api::app(state.clone(), CorsLayer::permissive());

        Self {
            router,
            state,
            _db_dir: db_dir,
            _event_task: event_task,
        }
    }

    /// Send a request without any auth headers.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        self.request_with_headers(method, uri, body, &[]).await
    }

    /// Send a request carrying the demo auth header.
    pub async fn request_authenticated(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        self.request_with_headers(method, uri, body, &[("x-demo-authenticated", "true")])
            .await
    }

    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Parse a response body as JSON.
    pub async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");
        serde_json::from_slice(&bytes).expect("parse response body as json")
    }

    /// Persist the demo user row by calling the auth endpoint, the same way
    /// the client does at login. Rows with a user foreign key need this first.
    pub async fn ensure_demo_user(&self) {
        let response = self
            .request_authenticated(Method::GET, "/api/auth/user", None)
            .await;
        assert_eq!(response.status(), StatusCode::OK, "demo user upsert failed");
    }

    /// Create a category through the API and return its JSON record.
    pub async fn seed_category(&self, name: &str) -> Value {
        self.ensure_demo_user().await;
        let response = self
            .request_authenticated(
                Method::POST,
                "/api/service-categories",
                Some(json!({ "name": name })),
            )
            .await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "seed category failed"
        );
        Self::read_json(response).await
    }

    /// Create a provider through the API and return its JSON record.
    pub async fn seed_provider(&self, business_name: &str, location: &str) -> Value {
        self.ensure_demo_user().await;
        let response = self
            .request_authenticated(
                Method::POST,
                "/api/service-providers",
                Some(json!({
                    "businessName": business_name,
                    "location": location,
                    "phone": "+91 98490 00000",
                })),
            )
            .await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "seed provider failed"
        );
        Self::read_json(response).await
    }

    /// Create a service listing through the API and return its JSON record.
    pub async fn seed_service(&self, provider_id: i64, title: &str) -> Value {
        let response = self
            .request_authenticated(
                Method::POST,
                "/api/services",
                Some(json!({
                    "providerId": provider_id,
                    "title": title,
                    "price": "1500",
                    "priceUnit": "per_sqft",
                })),
            )
            .await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "seed service failed"
        );
        Self::read_json(response).await
    }

    /// Create a furniture product through the API and return its JSON record.
    pub async fn seed_product(&self, provider_id: i64, name: &str, price: &str) -> Value {
        let response = self
            .request_authenticated(
                Method::POST,
                "/api/furniture-products",
                Some(json!({
                    "providerId": provider_id,
                    "name": name,
                    "category": "sofa",
                    "price": price,
                })),
            )
            .await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "seed product failed"
        );
        Self::read_json(response).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self._event_task.abort();
    }
}
