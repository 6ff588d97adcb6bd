use crate::auth::DemoUser;
use crate::handlers::common::{created_response, success_response};
use crate::services::orders::{CreateOrderInput, OrderWithItems, UpdateOrderInput};
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
        .route("/furniture-orders", get(list_orders))
        .route("/furniture-orders", post(create_order))
        .route("/furniture-orders/:id", get(get_order))
        .route("/furniture-orders/:id", put(update_order))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    /// When set, returns the provider's incoming orders instead of the
    /// caller's own.
    pub provider_id: Option<i32>,
}

/// List the caller's furniture orders, or a provider's incoming ones.
/// Each order carries its line items.
#[utoipa::path(
    get,
    path = "/api/furniture-orders",
    summary = "List furniture orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Orders with items, newest first", body = Vec<OrderWithItems>),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    user: DemoUser,
    Query(query): Query<OrderListQuery>,
) -> Result<Response, ServiceError> {
    let orders = state
        .services
        .orders
        .list_orders(&user.id, query.provider_id)
        .await?;
    Ok(success_response(orders))
}

/// Fetch one furniture order with its line items.
#[utoipa::path(
    get,
    path = "/api/furniture-orders/{id}",
    summary = "Get furniture order",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order with items", body = OrderWithItems),
        (status = 401, description = "Request is not authenticated"),
        (status = 404, description = "No such order", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _user: DemoUser,
) -> Result<Response, ServiceError> {
    let order = state.services.orders.get_order(id).await?;
    Ok(success_response(order))
}

/// Place a furniture order. The order header and every line item land in
/// one transaction.
#[utoipa::path(
    post,
    path = "/api/furniture-orders",
    summary = "Create furniture order",
    request_body = CreateOrderInput,
    responses(
        (status = 201, description = "Stored order with items", body = OrderWithItems),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    user: DemoUser,
    Json(input): Json<CreateOrderInput>,
) -> Result<Response, ServiceError> {
    let order = state.services.orders.create_order(&user.id, input).await?;
    Ok(created_response(order))
}

/// Update an order's status or payment fields.
#[utoipa::path(
    put,
    path = "/api/furniture-orders/{id}",
    summary = "Update furniture order",
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateOrderInput,
    responses(
        (status = 200, description = "Updated order with items", body = OrderWithItems),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 404, description = "No such order", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _user: DemoUser,
    Json(input): Json<UpdateOrderInput>,
) -> Result<Response, ServiceError> {
    let order = state.services.orders.update_order(id, input).await?;
    Ok(success_response(order))
}
