use crate::auth::DemoUser;
use crate::handlers::common::{created_response, success_response};
use crate::services::catalog::{CreateServiceInput, UpdateServiceInput};
use crate::{errors::ServiceError, AppState};
use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services))
        .route("/services", post(create_service))
        .route("/services/:id", get(get_service))
        .route("/services/:id", put(update_service))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListQuery {
    pub category_id: Option<i32>,
    pub provider_id: Option<i32>,
}

/// List active services, optionally narrowed by category or provider.
#[utoipa::path(
    get,
    path = "/api/services",
    summary = "List services",
    params(ServiceListQuery),
    responses(
        (status = 200, description = "Active services", body = Vec<crate::entities::service::Model>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "services"
)]
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceListQuery>,
) -> Result<Response, ServiceError> {
    let services = state
        .services
        .catalog
        .list_active(query.category_id, query.provider_id)
        .await?;
    Ok(success_response(services))
}

/// Fetch one service listing.
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    summary = "Get service",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "The service", body = crate::entities::service::Model),
        (status = 404, description = "No such service", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "services"
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let service = state.services.catalog.get_service(id).await?;
    Ok(success_response(service))
}

/// Publish a service listing.
#[utoipa::path(
    post,
    path = "/api/services",
    summary = "Create service",
    request_body = CreateServiceInput,
    responses(
        (status = 201, description = "Stored service", body = crate::entities::service::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "services"
)]
pub async fn create_service(
    State(state): State<AppState>,
    _user: DemoUser,
    Json(input): Json<CreateServiceInput>,
) -> Result<Response, ServiceError> {
    let service = state.services.catalog.create_service(input).await?;
    Ok(created_response(service))
}

/// Partially update a service listing.
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    summary = "Update service",
    params(("id" = i32, Path, description = "Service id")),
    request_body = UpdateServiceInput,
    responses(
        (status = 200, description = "Updated service", body = crate::entities::service::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 404, description = "No such service", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "services"
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _user: DemoUser,
    Json(input): Json<UpdateServiceInput>,
) -> Result<Response, ServiceError> {
    let service = state.services.catalog.update_service(id, input).await?;
    Ok(success_response(service))
}
