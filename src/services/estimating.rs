use crate::{
    db::DbPool,
    entities::cost_estimate::{self, Entity as EstimateEntity, Model as EstimateModel},
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use metrics::counter;
use rust_decimal::prelude::RoundingStrategy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEstimateInput {
    #[validate(length(min = 1, message = "Room type is required"))]
    pub room_type: String,
    #[validate(range(min = 1, message = "Room size must be a positive number of square feet"))]
    pub room_size: i32,
    #[validate(length(min = 1, message = "Service type is required"))]
    pub service_type: String,
    #[validate(length(min = 1, message = "Quality level is required"))]
    pub quality_level: String,
    pub location: Option<String>,
}

/// Material/labor/total split produced by the estimator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub material_cost: Decimal,
    pub labor_cost: Decimal,
    pub total_cost: Decimal,
}

/// Base cost per square foot for a (room type, quality level) pair.
/// Unknown combinations price at a flat 400.
fn base_cost_per_sqft(room_type: &str, quality_level: &str) -> Decimal {
    match (room_type, quality_level) {
        ("living_room", "premium") => dec!(800),
        ("living_room", "standard") => dec!(500),
        ("living_room", "budget") => dec!(300),
        ("bedroom", "premium") => dec!(600),
        ("bedroom", "standard") => dec!(400),
        ("bedroom", "budget") => dec!(250),
        ("kitchen", "premium") => dec!(1200),
        ("kitchen", "standard") => dec!(800),
        ("kitchen", "budget") => dec!(500),
        ("bathroom", "premium") => dec!(900),
        ("bathroom", "standard") => dec!(600),
        ("bathroom", "budget") => dec!(350),
        ("office", "premium") => dec!(700),
        ("office", "standard") => dec!(450),
        ("office", "budget") => dec!(280),
        _ => dec!(400),
    }
}

/// Scope multiplier per service type. Unknown types multiply by 1.
fn service_multiplier(service_type: &str) -> Decimal {
    match service_type {
        "interior_design" => dec!(1.0),
        "furniture" => dec!(1.2),
        "complete_package" => dec!(1.8),
        _ => dec!(1.0),
    }
}

fn round_rupees(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the material/labor/total cost for a room.
///
/// The split is 60% material and 40% labor, each rounded to whole rupees
/// half-away-from-zero before the total is summed.
pub fn estimate_costs(
    room_type: &str,
    room_size: i32,
    service_type: &str,
    quality_level: &str,
) -> CostBreakdown {
    let base = base_cost_per_sqft(room_type, quality_level);
    let multiplier = service_multiplier(service_type);
    let subtotal = base * Decimal::from(room_size) * multiplier;

    let material_cost = round_rupees(subtotal * dec!(0.6));
    let labor_cost = round_rupees(subtotal * dec!(0.4));

    CostBreakdown {
        material_cost,
        labor_cost,
        total_cost: material_cost + labor_cost,
    }
}

/// Service that computes and stores cost estimates. Estimates may be
/// anonymous; `user_id` is attached only when the request was authenticated.
#[derive(Clone)]
pub struct EstimateService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl EstimateService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Lists the caller's saved estimates, newest first.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<EstimateModel>, ServiceError> {
        let db = &*self.db_pool;

        EstimateEntity::find()
            .filter(cost_estimate::Column::UserId.eq(user_id))
            .order_by_desc(cost_estimate::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list cost estimates");
                ServiceError::DatabaseError(e)
            })
    }

    /// Computes the costs server-side and persists the estimate. Any cost
    /// figures sent by the client are ignored.
    #[instrument(skip(self, input), fields(room_type = %input.room_type, room_size = input.room_size))]
    pub async fn create_estimate(
        &self,
        user_id: Option<String>,
        input: CreateEstimateInput,
    ) -> Result<EstimateModel, ServiceError> {
        input.validate()?;

        let breakdown = estimate_costs(
            &input.room_type,
            input.room_size,
            &input.service_type,
            &input.quality_level,
        );
        let details = serde_json::json!({
            "baseCostPerSqft": base_cost_per_sqft(&input.room_type, &input.quality_level),
            "serviceMultiplier": service_multiplier(&input.service_type),
        });

        let db = &*self.db_pool;
        let active = cost_estimate::ActiveModel {
            user_id: Set(user_id),
            room_type: Set(input.room_type),
            room_size: Set(input.room_size),
            service_type: Set(input.service_type),
            quality_level: Set(input.quality_level),
            material_cost: Set(Some(breakdown.material_cost)),
            labor_cost: Set(Some(breakdown.labor_cost)),
            total_cost: Set(Some(breakdown.total_cost)),
            location: Set(input.location),
            estimate_details: Set(Some(details)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active.insert(db).await.map_err(|e| {
            error!(error = %e, "Failed to persist cost estimate");
            ServiceError::DatabaseError(e)
        })?;

        counter!("estimates.created", 1);
        info!(estimate_id = model.id, "Cost estimate saved");
        if let Err(e) = self
            .event_sender
            .send(Event::EstimateCreated(model.id))
            .await
        {
            warn!(error = %e, estimate_id = model.id, "Failed to send estimate created event");
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("kitchen", 100, "interior_design", "standard", 48000, 32000, 80000 ; "hundred sqft standard kitchen")]
    #[test_case("living_room", 10, "furniture", "premium", 5760, 3840, 9600 ; "furniture multiplier applies")]
    #[test_case("kitchen", 50, "complete_package", "premium", 64800, 43200, 108000 ; "complete package premium kitchen")]
    #[test_case("office", 1, "complete_package", "budget", 302, 202, 504 ; "uneven split still sums to subtotal")]
    #[test_case("garage", 10, "interior_design", "standard", 2400, 1600, 4000 ; "unknown room uses flat base")]
    #[test_case("kitchen", 10, "landscaping", "standard", 4800, 3200, 8000 ; "unknown service keeps base price")]
    fn cost_table(
        room: &str,
        size: i32,
        service: &str,
        quality: &str,
        material: i64,
        labor: i64,
        total: i64,
    ) {
        let breakdown = estimate_costs(room, size, service, quality);
        assert_eq!(breakdown.material_cost, Decimal::from(material));
        assert_eq!(breakdown.labor_cost, Decimal::from(labor));
        assert_eq!(breakdown.total_cost, Decimal::from(total));
    }

    #[test]
    fn material_and_labor_round_half_away_from_zero() {
        // office budget at 1 sqft under the 1.2 multiplier: subtotal 336,
        // material 201.6 rounds up, labor 134.4 rounds down.
        let breakdown = estimate_costs("office", 1, "furniture", "budget");
        assert_eq!(breakdown.material_cost, Decimal::from(202));
        assert_eq!(breakdown.labor_cost, Decimal::from(134));
        assert_eq!(breakdown.total_cost, Decimal::from(336));
    }

    #[test]
    fn unknown_quality_also_falls_back() {
        let breakdown = estimate_costs("kitchen", 2, "interior_design", "luxury");
        assert_eq!(breakdown.total_cost, Decimal::from(800));
    }
}
