use crate::auth::DemoUser;
use crate::handlers::common::success_response;
use crate::{errors::ServiceError, AppState};
use axum::{response::Response, routing::post, Json, Router};
use rust_decimal::prelude::RoundingStrategy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub fn routes() -> Router<AppState> {
    Router::new().route("/create-payment-intent", post(create_payment_intent))
}

fn validate_positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("range");
        err.message = Some("Amount must be greater than 0".into());
        Err(err)
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentIntentInput {
    /// Amount in rupees
    #[validate(custom = "validate_positive_amount")]
    pub amount: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// Demo payment intent. No payment gateway is wired in; the handler logs
/// the amount in paise and hands back a placeholder client secret so the
/// checkout flow can proceed end to end.
#[utoipa::path(
    post,
    path = "/api/create-payment-intent",
    summary = "Create payment intent",
    request_body = CreatePaymentIntentInput,
    responses(
        (status = 200, description = "Placeholder client secret", body = PaymentIntentResponse),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 401, description = "Request is not authenticated"),
    ),
    tag = "payments"
)]
#[instrument(skip(input), fields(user_id = %user.id))]
pub async fn create_payment_intent(
    user: DemoUser,
    Json(input): Json<CreatePaymentIntentInput>,
) -> Result<Response, ServiceError> {
    input.validate()?;

    let paise = (input.amount * dec!(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    info!(amount_paise = %paise, currency = "inr", "issuing demo payment intent");

    Ok(success_response(PaymentIntentResponse {
        client_secret: "demo_client_secret".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative_amounts() {
        let zero = CreatePaymentIntentInput {
            amount: Decimal::ZERO,
        };
        assert!(zero.validate().is_err());

        let negative = CreatePaymentIntentInput {
            amount: dec!(-10),
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn accepts_positive_amounts() {
        let input = CreatePaymentIntentInput { amount: dec!(499.50) };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rupees_convert_to_paise() {
        let paise = (dec!(499.50) * dec!(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(paise, dec!(49950));
    }
}
