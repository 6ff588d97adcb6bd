use crate::auth::{DemoUser, OptionalDemoUser};
use crate::handlers::common::{created_response, success_response};
use crate::services::estimating::CreateEstimateInput;
use crate::{errors::ServiceError, AppState};
use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Json, Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cost-estimates", get(list_estimates))
        .route("/cost-estimates", post(create_estimate))
}

/// List the caller's saved estimates.
#[utoipa::path(
    get,
    path = "/api/cost-estimates",
    summary = "List cost estimates",
    responses(
        (status = 200, description = "The caller's estimates, newest first", body = Vec<crate::entities::cost_estimate::Model>),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "estimates"
)]
pub async fn list_estimates(
    State(state): State<AppState>,
    user: DemoUser,
) -> Result<Response, ServiceError> {
    let estimates = state.services.estimates.list_for_user(&user.id).await?;
    Ok(success_response(estimates))
}

/// Compute and store a cost estimate. Works unauthenticated; an estimate
/// from a signed-in caller is attached to their account.
#[utoipa::path(
    post,
    path = "/api/cost-estimates",
    summary = "Create cost estimate",
    request_body = CreateEstimateInput,
    responses(
        (status = 201, description = "Stored estimate with computed costs", body = crate::entities::cost_estimate::Model),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "estimates"
)]
pub async fn create_estimate(
    State(state): State<AppState>,
    OptionalDemoUser(user): OptionalDemoUser,
    Json(input): Json<CreateEstimateInput>,
) -> Result<Response, ServiceError> {
    let user_id = user.map(|u| u.id);
    let estimate = state
        .services
        .estimates
        .create_estimate(user_id, input)
        .await?;
    Ok(created_response(estimate))
}
