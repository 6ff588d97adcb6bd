use crate::auth::DemoUser;
use crate::handlers::common::{created_response, success_response};
use crate::services::furniture::{CreateProductInput, UpdateProductInput};
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
        .route("/furniture-products", get(list_products))
        .route("/furniture-products", post(create_product))
        .route("/furniture-products/:id", get(get_product))
        .route("/furniture-products/:id", put(update_product))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub provider_id: Option<i32>,
    /// Product category such as "sofa" or "wardrobe"
    pub category: Option<String>,
}

/// List active furniture products, optionally narrowed by provider or category.
#[utoipa::path(
    get,
    path = "/api/furniture-products",
    summary = "List furniture products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Active products", body = Vec<crate::entities::furniture_product::Model>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "furniture"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Response, ServiceError> {
    let products = state
        .services
        .furniture
        .list_active(query.provider_id, query.category)
        .await?;
    Ok(success_response(products))
}

/// Fetch one furniture product.
#[utoipa::path(
    get,
    path = "/api/furniture-products/{id}",
    summary = "Get furniture product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = crate::entities::furniture_product::Model),
        (status = 404, description = "No such product", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "furniture"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ServiceError> {
    let product = state.services.furniture.get_product(id).await?;
    Ok(success_response(product))
}

/// Publish a furniture product.
#[utoipa::path(
    post,
    path = "/api/furniture-products",
    summary = "Create furniture product",
    request_body = CreateProductInput,
    responses(
        (status = 201, description = "Stored product", body = crate::entities::furniture_product::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "furniture"
)]
pub async fn create_product(
    State(state): State<AppState>,
    _user: DemoUser,
    Json(input): Json<CreateProductInput>,
) -> Result<Response, ServiceError> {
    let product = state.services.furniture.create_product(input).await?;
    Ok(created_response(product))
}

/// Partially update a furniture product.
#[utoipa::path(
    put,
    path = "/api/furniture-products/{id}",
    summary = "Update furniture product",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductInput,
    responses(
        (status = 200, description = "Updated product", body = crate::entities::furniture_product::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 404, description = "No such product", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "furniture"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _user: DemoUser,
    Json(input): Json<UpdateProductInput>,
) -> Result<Response, ServiceError> {
    let product = state.services.furniture.update_product(id, input).await?;
    Ok(success_response(product))
}
