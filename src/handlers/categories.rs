use crate::auth::DemoUser;
use crate::handlers::common::{created_response, success_response};
use crate::services::categories::CreateCategoryInput;
use crate::{errors::ServiceError, AppState};
use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Json, Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/service-categories", get(list_categories))
        .route("/service-categories", post(create_category))
}

/// List active service categories.
#[utoipa::path(
    get,
    path = "/api/service-categories",
    summary = "List categories",
    responses(
        (status = 200, description = "Active categories", body = Vec<crate::entities::service_category::Model>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let categories = state.services.categories.list_active().await?;
    Ok(success_response(categories))
}

/// Create a service category.
#[utoipa::path(
    post,
    path = "/api/service-categories",
    summary = "Create category",
    request_body = CreateCategoryInput,
    responses(
        (status = 201, description = "Stored category", body = crate::entities::service_category::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    _user: DemoUser,
    Json(input): Json<CreateCategoryInput>,
) -> Result<Response, ServiceError> {
    let category = state.services.categories.create_category(input).await?;
    Ok(created_response(category))
}
