use crate::auth::DemoUser;
use crate::handlers::common::{created_response, success_response};
use crate::services::providers::{CreateProviderInput, UpdateProviderInput};
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
        .route("/service-providers", get(list_providers))
        .route("/service-providers", post(create_provider))
        .route("/service-providers/:id", get(get_provider))
        .route("/service-providers/:id", put(update_provider))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProviderListQuery {
    /// Locality to filter by, e.g. "L.B. Nagar"
    pub location: Option<String>,
}

/// List active providers, optionally narrowed to a locality.
#[utoipa::path(
    get,
    path = "/api/service-providers",
    summary = "List providers",
    params(ProviderListQuery),
    responses(
        (status = 200, description = "Active providers", body = Vec<crate::entities::service_provider::Model>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "providers"
)]
pub async fn list_providers(
    State(state): State<AppState>,
    Query(query): Query<ProviderListQuery>,
) -> Result<Response, ServiceError> {
    let providers = state.services.providers.list_active(query.location).await?;
    Ok(success_response(providers))
}

/// Fetch one provider.
#[utoipa::path(
    get,
    path = "/api/service-providers/{id}",
    summary = "Get provider",
    params(("id" = i32, Path, description = "Provider id")),
    responses(
        (status = 200, description = "The provider", body = crate::entities::service_provider::Model),
        (status = 404, description = "No such provider", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "providers"
)]
pub async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let provider = state.services.providers.get_provider(id).await?;
    Ok(success_response(provider))
}

/// Register a provider profile for the signed-in account.
#[utoipa::path(
    post,
    path = "/api/service-providers",
    summary = "Create provider",
    request_body = CreateProviderInput,
    responses(
        (status = 201, description = "Stored provider", body = crate::entities::service_provider::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "providers"
)]
pub async fn create_provider(
    State(state): State<AppState>,
    user: DemoUser,
    Json(input): Json<CreateProviderInput>,
) -> Result<Response, ServiceError> {
    let provider = state
        .services
        .providers
        .create_provider(&user.id, input)
        .await?;
    Ok(created_response(provider))
}

/// Partially update a provider profile.
#[utoipa::path(
    put,
    path = "/api/service-providers/{id}",
    summary = "Update provider",
    params(("id" = i32, Path, description = "Provider id")),
    request_body = UpdateProviderInput,
    responses(
        (status = 200, description = "Updated provider", body = crate::entities::service_provider::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 404, description = "No such provider", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "providers"
)]
pub async fn update_provider(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _user: DemoUser,
    Json(input): Json<UpdateProviderInput>,
) -> Result<Response, ServiceError> {
    let provider = state
        .services
        .providers
        .update_provider(id, input)
        .await?;
    Ok(success_response(provider))
}
