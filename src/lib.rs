//! iBuildz API Library
//!
//! Core functionality for the iBuildz marketplace backend: providers,
//! service and furniture catalogs, bookings, orders, reviews and cost
//! estimates, served over REST.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod middleware_helpers;
pub mod openapi;
pub mod services;
pub mod tracing_ext;

use axum::{extract::State, response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<config::AppConfig>,
    pub event_sender: Arc<events::EventSender>,
    pub services: handlers::AppServices,
}

/// All `/api/*` routes. Nested under `/api` by [`app`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(api_status))
        .merge(handlers::auth::routes())
        .merge(handlers::categories::routes())
        .merge(handlers::providers::routes())
        .merge(handlers::services::routes())
        .merge(handlers::furniture::routes())
        .merge(handlers::bookings::routes())
        .merge(handlers::orders::routes())
        .merge(handlers::reviews::routes())
        .merge(handlers::estimates::routes())
        .merge(handlers::search::routes())
        .merge(handlers::payments::routes())
}

/// Builds the full application router: root and health endpoints, the
/// `/api` surface, Swagger UI and the shared middleware stack. The CORS
/// layer is passed in because its construction depends on environment
/// checks that belong to startup.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    let request_timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .route("/", get(|| async { "ibuildz-api up" }))
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http().make_span_with(tracing_ext::RequestSpanMaker))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}

async fn api_status(State(state): State<AppState>) -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    let git = option_env!("GIT_HASH").unwrap_or("unknown");

    Json(json!({
        "status": "ok",
        "service": "ibuildz-api",
        "version": version,
        "git": git,
        "environment": state.config.environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    Json(json!({
        "status": db_status,
        "checks": {
            "database": db_status,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub mod prelude {
    pub use crate::auth::*;
    pub use crate::db::*;
    pub use crate::errors::*;
    pub use crate::events::*;
    pub use crate::openapi::*;
    pub use crate::{api_routes, app, AppState};
}
