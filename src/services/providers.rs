use crate::{
    db::DbPool,
    entities::service_provider::{self, Entity as ProviderEntity, Model as ProviderModel},
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProviderInput {
    #[validate(length(min = 1, message = "Business name is required"))]
    pub business_name: String,
    pub business_name_te: Option<String>,
    pub description: Option<String>,
    pub description_te: Option<String>,
    pub category_id: Option<i32>,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    pub experience: Option<i32>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProviderInput {
    #[validate(length(min = 1, message = "Business name cannot be empty"))]
    pub business_name: Option<String>,
    pub business_name_te: Option<String>,
    pub description: Option<String>,
    pub description_te: Option<String>,
    pub category_id: Option<i32>,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: Option<String>,
    #[validate(length(min = 1, message = "Phone cannot be empty"))]
    pub phone: Option<String>,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    pub experience: Option<i32>,
    pub is_verified: Option<bool>,
    pub is_active: Option<bool>,
}

/// Service for provider profiles. `rating` and `review_count` are owned by
/// the review aggregate recompute and are never written here.
#[derive(Clone)]
pub struct ProviderService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl ProviderService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Lists active providers, optionally narrowed to one locality.
    #[instrument(skip(self))]
    pub async fn list_active(
        &self,
        location: Option<String>,
    ) -> Result<Vec<ProviderModel>, ServiceError> {
        let db = &*self.db_pool;

        let mut query =
            ProviderEntity::find().filter(service_provider::Column::IsActive.eq(true));
        if let Some(location) = location {
            query = query.filter(service_provider::Column::Location.eq(location));
        }

        query
            .order_by_asc(service_provider::Column::Id)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list service providers");
                ServiceError::DatabaseError(e)
            })
    }

    /// Fetches a provider by id.
    #[instrument(skip(self))]
    pub async fn get_provider(&self, provider_id: i32) -> Result<ProviderModel, ServiceError> {
        let db = &*self.db_pool;

        ProviderEntity::find_by_id(provider_id)
            .one(db)
            .await
            .map_err(|e| {
                error!(error = %e, provider_id, "Failed to fetch service provider");
                ServiceError::DatabaseError(e)
            })?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Service provider {} not found", provider_id))
            })
    }

    /// Registers a provider profile for the given account.
    ///
    /// The owning user id always comes from the authenticated identity, never
    /// from the request body.
    #[instrument(skip(self, input), fields(user_id = %user_id, business_name = %input.business_name))]
    pub async fn create_provider(
        &self,
        user_id: &str,
        input: CreateProviderInput,
    ) -> Result<ProviderModel, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let now = Utc::now();
        let active = service_provider::ActiveModel {
            user_id: Set(user_id.to_string()),
            business_name: Set(input.business_name),
            business_name_te: Set(input.business_name_te),
            description: Set(input.description),
            description_te: Set(input.description_te),
            category_id: Set(input.category_id),
            location: Set(input.location),
            phone: Set(input.phone),
            email: Set(input.email),
            website: Set(input.website),
            experience: Set(input.experience),
            rating: Set(Decimal::ZERO),
            review_count: Set(0),
            is_verified: Set(false),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        let model = active.insert(db).await.map_err(|e| {
            error!(error = %e, "Failed to create service provider");
            ServiceError::DatabaseError(e)
        })?;

        info!(provider_id = model.id, "Service provider created");
        if let Err(e) = self
            .event_sender
            .send(Event::ProviderCreated(model.id))
            .await
        {
            warn!(error = %e, provider_id = model.id, "Failed to send provider created event");
        }

        Ok(model)
    }

    /// Applies a partial update to a provider profile.
    #[instrument(skip(self, input))]
    pub async fn update_provider(
        &self,
        provider_id: i32,
        input: UpdateProviderInput,
    ) -> Result<ProviderModel, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let model = self.get_provider(provider_id).await?;
        let mut active: service_provider::ActiveModel = model.into();

        if let Some(business_name) = input.business_name {
            active.business_name = Set(business_name);
        }
        if let Some(business_name_te) = input.business_name_te {
            active.business_name_te = Set(Some(business_name_te));
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(description_te) = input.description_te {
            active.description_te = Set(Some(description_te));
        }
        if let Some(category_id) = input.category_id {
            active.category_id = Set(Some(category_id));
        }
        if let Some(location) = input.location {
            active.location = Set(location);
        }
        if let Some(phone) = input.phone {
            active.phone = Set(phone);
        }
        if let Some(email) = input.email {
            active.email = Set(Some(email));
        }
        if let Some(website) = input.website {
            active.website = Set(Some(website));
        }
        if let Some(experience) = input.experience {
            active.experience = Set(Some(experience));
        }
        if let Some(is_verified) = input.is_verified {
            active.is_verified = Set(is_verified);
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(db).await.map_err(|e| {
            error!(error = %e, provider_id, "Failed to update service provider");
            ServiceError::DatabaseError(e)
        })?;

        info!(provider_id, "Service provider updated");
        if let Err(e) = self
            .event_sender
            .send(Event::ProviderUpdated(provider_id))
            .await
        {
            warn!(error = %e, provider_id, "Failed to send provider updated event");
        }

        Ok(updated)
    }
}
