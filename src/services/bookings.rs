use crate::{
    db::DbPool,
    entities::booking::{self, BookingStatus, Entity as BookingEntity, Model as BookingModel},
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::{DateTime, Utc};
use metrics::counter;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingInput {
    pub service_id: Option<i32>,
    pub provider_id: Option<i32>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub estimated_cost: Option<Decimal>,
    pub notes: Option<String>,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "Customer phone is required"))]
    pub customer_phone: String,
    #[validate(email(message = "Customer email must be a valid address"))]
    pub customer_email: Option<String>,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    pub project_details: Option<serde_json::Value>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingInput {
    pub status: Option<BookingStatus>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub estimated_cost: Option<Decimal>,
    pub final_cost: Option<Decimal>,
    pub notes: Option<String>,
}

/// Service for bookings, the customer-to-provider work requests.
#[derive(Clone)]
pub struct BookingService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl BookingService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Lists the caller's bookings, newest first. When `provider_id` is
    /// given the listing switches to that provider's incoming bookings
    /// (the merchant dashboard view).
    #[instrument(skip(self))]
    pub async fn list_bookings(
        &self,
        user_id: &str,
        provider_id: Option<i32>,
    ) -> Result<Vec<BookingModel>, ServiceError> {
        let db = &*self.db_pool;

        let query = match provider_id {
            Some(provider_id) => {
                BookingEntity::find().filter(booking::Column::ProviderId.eq(provider_id))
            }
            None => BookingEntity::find().filter(booking::Column::UserId.eq(user_id)),
        };

        query
            .order_by_desc(booking::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list bookings");
                ServiceError::DatabaseError(e)
            })
    }

    /// Fetches a booking by id.
    #[instrument(skip(self))]
    pub async fn get_booking(&self, booking_id: i32) -> Result<BookingModel, ServiceError> {
        let db = &*self.db_pool;

        BookingEntity::find_by_id(booking_id)
            .one(db)
            .await
            .map_err(|e| {
                error!(error = %e, booking_id, "Failed to fetch booking");
                ServiceError::DatabaseError(e)
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("Booking {} not found", booking_id)))
    }

    /// Creates a booking for the authenticated user.
    #[instrument(skip(self, input), fields(user_id = %user_id))]
    pub async fn create_booking(
        &self,
        user_id: &str,
        input: CreateBookingInput,
    ) -> Result<BookingModel, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let now = Utc::now();
        let active = booking::ActiveModel {
            user_id: Set(user_id.to_string()),
            service_id: Set(input.service_id),
            provider_id: Set(input.provider_id),
            status: Set(BookingStatus::Pending),
            scheduled_date: Set(input.scheduled_date),
            estimated_cost: Set(input.estimated_cost),
            final_cost: Set(None),
            notes: Set(input.notes),
            customer_name: Set(input.customer_name),
            customer_phone: Set(input.customer_phone),
            customer_email: Set(input.customer_email),
            location: Set(input.location),
            project_details: Set(input.project_details),
            created_at: Set(now),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        let model = active.insert(db).await.map_err(|e| {
            error!(error = %e, "Failed to create booking");
            ServiceError::DatabaseError(e)
        })?;

        counter!("bookings.created", 1);
        info!(booking_id = model.id, user_id = %user_id, "Booking created");
        if let Err(e) = self
            .event_sender
            .send(Event::BookingCreated(model.id))
            .await
        {
            warn!(error = %e, booking_id = model.id, "Failed to send booking created event");
        }

        Ok(model)
    }

    /// Applies a partial update (status transition, costs, notes).
    #[instrument(skip(self, input))]
    pub async fn update_booking(
        &self,
        booking_id: i32,
        input: UpdateBookingInput,
    ) -> Result<BookingModel, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let model = self.get_booking(booking_id).await?;
        let old_status = model.status;
        let mut active: booking::ActiveModel = model.into();

        if let Some(status) = input.status {
            active.status = Set(status);
        }
        if let Some(scheduled_date) = input.scheduled_date {
            active.scheduled_date = Set(Some(scheduled_date));
        }
        if let Some(estimated_cost) = input.estimated_cost {
            active.estimated_cost = Set(Some(estimated_cost));
        }
        if let Some(final_cost) = input.final_cost {
            active.final_cost = Set(Some(final_cost));
        }
        if let Some(notes) = input.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(db).await.map_err(|e| {
            error!(error = %e, booking_id, "Failed to update booking");
            ServiceError::DatabaseError(e)
        })?;

        info!(booking_id, "Booking updated");
        if updated.status != old_status {
            if let Err(e) = self
                .event_sender
                .send(Event::BookingStatusChanged {
                    booking_id,
                    old_status: old_status.to_value(),
                    new_status: updated.status.to_value(),
                })
                .await
            {
                warn!(error = %e, booking_id, "Failed to send booking status event");
            }
        }

        Ok(updated)
    }
}
