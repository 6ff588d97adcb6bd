use crate::auth::DemoUser;
use crate::handlers::common::success_response;
use crate::{errors::ServiceError, AppState};
use axum::{extract::State, response::Response, routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/user", get(current_user))
}

/// Return the signed-in account, writing its row on first sight.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    summary = "Current user",
    description = "Returns the demo account for the session, upserting its user row",
    responses(
        (status = 200, description = "The signed-in user", body = crate::entities::user::Model),
        (status = 401, description = "Request is not authenticated"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn current_user(
    State(state): State<AppState>,
    user: DemoUser,
) -> Result<Response, ServiceError> {
    let stored = state.services.users.upsert_user(&user).await?;
    Ok(success_response(stored))
}
