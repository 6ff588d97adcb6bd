use crate::handlers::common::success_response;
use crate::{errors::ServiceError, AppState};
use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search/services", get(search_services))
        .route("/search/furniture", get(search_furniture))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ServiceSearchQuery {
    /// Search term, matched case-insensitively against titles
    pub q: Option<String>,
    /// Locality to narrow providers by
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FurnitureSearchQuery {
    /// Search term, matched case-insensitively against product names
    pub q: Option<String>,
}

/// Search active services by title, optionally narrowed to a locality.
#[utoipa::path(
    get,
    path = "/api/search/services",
    summary = "Search services",
    params(ServiceSearchQuery),
    responses(
        (status = 200, description = "Matching services", body = Vec<crate::entities::service::Model>),
        (status = 400, description = "Missing search term", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "search"
)]
pub async fn search_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceSearchQuery>,
) -> Result<Response, ServiceError> {
    let term = query
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ServiceError::BadRequest("Query parameter q is required".to_string()))?;
    let services = state
        .services
        .catalog
        .search_services(&term, query.location)
        .await?;
    Ok(success_response(services))
}

/// Search active furniture products by name.
#[utoipa::path(
    get,
    path = "/api/search/furniture",
    summary = "Search furniture",
    params(FurnitureSearchQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<crate::entities::furniture_product::Model>),
        (status = 400, description = "Missing search term", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "search"
)]
pub async fn search_furniture(
    State(state): State<AppState>,
    Query(query): Query<FurnitureSearchQuery>,
) -> Result<Response, ServiceError> {
    let term = query
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ServiceError::BadRequest("Query parameter q is required".to_string()))?;
    let products = state.services.furniture.search_products(&term).await?;
    Ok(success_response(products))
}
