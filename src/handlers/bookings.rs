use crate::auth::DemoUser;
use crate::handlers::common::{created_response, success_response};
use crate::services::bookings::{CreateBookingInput, UpdateBookingInput};
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
        .route("/bookings", get(list_bookings))
        .route("/bookings", post(create_booking))
        .route("/bookings/:id", get(get_booking))
        .route("/bookings/:id", put(update_booking))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    /// When set, returns the provider's incoming bookings instead of the
    /// caller's own.
    pub provider_id: Option<i32>,
}

/// List the caller's bookings, or a provider's incoming bookings.
#[utoipa::path(
    get,
    path = "/api/bookings",
    summary = "List bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Bookings, newest first", body = Vec<crate::entities::booking::Model>),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "bookings"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    user: DemoUser,
    Query(query): Query<BookingListQuery>,
) -> Result<Response, ServiceError> {
    let bookings = state
        .services
        .bookings
        .list_bookings(&user.id, query.provider_id)
        .await?;
    Ok(success_response(bookings))
}

/// Fetch one booking.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    summary = "Get booking",
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "The booking", body = crate::entities::booking::Model),
        (status = 401, description = "Request is not authenticated"),
        (status = 404, description = "No such booking", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "bookings"
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _user: DemoUser,
) -> Result<Response, ServiceError> {
    let booking = state.services.bookings.get_booking(id).await?;
    Ok(success_response(booking))
}

/// Book a service for the signed-in account.
#[utoipa::path(
    post,
    path = "/api/bookings",
    summary = "Create booking",
    request_body = CreateBookingInput,
    responses(
        (status = 201, description = "Stored booking", body = crate::entities::booking::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    user: DemoUser,
    Json(input): Json<CreateBookingInput>,
) -> Result<Response, ServiceError> {
    let booking = state
        .services
        .bookings
        .create_booking(&user.id, input)
        .await?;
    Ok(created_response(booking))
}

/// Update a booking's status or schedule.
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    summary = "Update booking",
    params(("id" = i32, Path, description = "Booking id")),
    request_body = UpdateBookingInput,
    responses(
        (status = 200, description = "Updated booking", body = crate::entities::booking::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 404, description = "No such booking", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "bookings"
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    _user: DemoUser,
    Json(input): Json<UpdateBookingInput>,
) -> Result<Response, ServiceError> {
    let booking = state.services.bookings.update_booking(id, input).await?;
    Ok(success_response(booking))
}
