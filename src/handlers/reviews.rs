use crate::auth::DemoUser;
use crate::handlers::common::{created_response, success_response};
use crate::services::reviews::{CreateReviewInput, ReviewFilter};
use crate::{errors::ServiceError, AppState};
use axum::{
    extract::{Query, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(list_reviews))
        .route("/reviews", post(create_review))
}

/// List reviews for a provider, service or product.
#[utoipa::path(
    get,
    path = "/api/reviews",
    summary = "List reviews",
    params(ReviewFilter),
    responses(
        (status = 200, description = "Reviews, newest first", body = Vec<crate::entities::review::Model>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(filter): Query<ReviewFilter>,
) -> Result<Response, ServiceError> {
    let reviews = state.services.reviews.list_reviews(filter).await?;
    Ok(success_response(reviews))
}

/// Leave a review. Provider and product rating aggregates are recomputed
/// in the same transaction.
#[utoipa::path(
    post,
    path = "/api/reviews",
    summary = "Create review",
    request_body = CreateReviewInput,
    responses(
        (status = 201, description = "Stored review", body = crate::entities::review::Model),
        (status = 400, description = "Validation failure or no review target", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    user: DemoUser,
    Json(input): Json<CreateReviewInput>,
) -> Result<Response, ServiceError> {
    let review = state.services.reviews.create_review(&user.id, input).await?;
    Ok(created_response(review))
}
