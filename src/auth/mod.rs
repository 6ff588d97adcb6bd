use crate::entities::user::UserRole;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Header that marks a request as authenticated in demo mode.
pub const DEMO_AUTH_HEADER: &str = "x-demo-authenticated";
/// Header that selects the demo account's role.
pub const DEMO_USER_TYPE_HEADER: &str = "x-demo-user-type";

pub const DEMO_USER_ID: &str = "demo-user-id";
pub const DEMO_USER_EMAIL: &str = "user@demo.com";
pub const DEMO_USER_FIRST_NAME: &str = "Demo";
pub const DEMO_USER_LAST_NAME: &str = "User";

/// Identity of the demo session attached to a request.
///
/// There is no credential store in demo mode. Any request carrying
/// `x-demo-authenticated: true` acts as the single demo account, with the
/// role taken from `x-demo-user-type` when present.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoUser {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl DemoUser {
    pub fn with_role(role: UserRole) -> Self {
        Self {
            id: DEMO_USER_ID.to_string(),
            email: DEMO_USER_EMAIL.to_string(),
            first_name: DEMO_USER_FIRST_NAME.to_string(),
            last_name: DEMO_USER_LAST_NAME.to_string(),
            role,
        }
    }

    /// Reads the demo identity out of request headers, if the request is
    /// marked authenticated.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let authenticated = headers
            .get(DEMO_AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value == "true")
            .unwrap_or(false);
        if !authenticated {
            return None;
        }

        let role = headers
            .get(DEMO_USER_TYPE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(UserRole::parse_or_default)
            .unwrap_or_default();

        Some(Self::with_role(role))
    }
}

/// Rejection returned when a protected route is hit without the demo headers.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "message": "Unauthorized" }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for DemoUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        DemoUser::from_headers(&parts.headers).ok_or(AuthRejection)
    }
}

/// Extractor for routes that behave differently for signed-in users but do
/// not require authentication.
#[derive(Debug, Clone)]
pub struct OptionalDemoUser(pub Option<DemoUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalDemoUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(DemoUser::from_headers(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn absent_headers_yield_no_user() {
        assert!(DemoUser::from_headers(&HeaderMap::new()).is_none());
    }

    #[test]
    fn flag_must_be_exactly_true() {
        let map = headers(&[(DEMO_AUTH_HEADER, "yes")]);
        assert!(DemoUser::from_headers(&map).is_none());
    }

    #[test]
    fn authenticated_request_defaults_to_user_role() {
        let map = headers(&[(DEMO_AUTH_HEADER, "true")]);
        let user = DemoUser::from_headers(&map).unwrap();
        assert_eq!(user.id, DEMO_USER_ID);
        assert_eq!(user.email, DEMO_USER_EMAIL);
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn user_type_header_selects_role() {
        let map = headers(&[(DEMO_AUTH_HEADER, "true"), (DEMO_USER_TYPE_HEADER, "merchant")]);
        let user = DemoUser::from_headers(&map).unwrap();
        assert_eq!(user.role, UserRole::Merchant);
    }

    #[test]
    fn unknown_user_type_falls_back_to_user() {
        let map = headers(&[(DEMO_AUTH_HEADER, "true"), (DEMO_USER_TYPE_HEADER, "wizard")]);
        let user = DemoUser::from_headers(&map).unwrap();
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn rejection_body_is_the_fixed_message() {
        let response = AuthRejection.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
