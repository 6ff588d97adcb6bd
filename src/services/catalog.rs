use crate::{
    db::DbPool,
    entities::service::{self, Entity as ServiceEntity, Model as ServiceModel, PriceUnit},
    entities::service_provider,
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceInput {
    pub provider_id: Option<i32>,
    pub category_id: Option<i32>,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub title_te: Option<String>,
    pub description: Option<String>,
    pub description_te: Option<String>,
    pub price: Option<Decimal>,
    #[serde(default)]
    pub price_unit: PriceUnit,
    pub images: Option<serde_json::Value>,
    pub features: Option<serde_json::Value>,
    pub features_te: Option<serde_json::Value>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceInput {
    pub provider_id: Option<i32>,
    pub category_id: Option<i32>,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub title_te: Option<String>,
    pub description: Option<String>,
    pub description_te: Option<String>,
    pub price: Option<Decimal>,
    pub price_unit: Option<PriceUnit>,
    pub images: Option<serde_json::Value>,
    pub features: Option<serde_json::Value>,
    pub features_te: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}

/// Service for the service listings a provider publishes.
#[derive(Clone)]
pub struct ServiceCatalogService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl ServiceCatalogService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Lists active services, optionally narrowed by category and provider.
    #[instrument(skip(self))]
    pub async fn list_active(
        &self,
        category_id: Option<i32>,
        provider_id: Option<i32>,
    ) -> Result<Vec<ServiceModel>, ServiceError> {
        let db = &*self.db_pool;

        let mut query = ServiceEntity::find().filter(service::Column::IsActive.eq(true));
        if let Some(category_id) = category_id {
            query = query.filter(service::Column::CategoryId.eq(category_id));
        }
        if let Some(provider_id) = provider_id {
            query = query.filter(service::Column::ProviderId.eq(provider_id));
        }

        query
            .order_by_asc(service::Column::Id)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list services");
                ServiceError::DatabaseError(e)
            })
    }

    /// Fetches a service by id.
    #[instrument(skip(self))]
    pub async fn get_service(&self, service_id: i32) -> Result<ServiceModel, ServiceError> {
        let db = &*self.db_pool;

        ServiceEntity::find_by_id(service_id)
            .one(db)
            .await
            .map_err(|e| {
                error!(error = %e, service_id, "Failed to fetch service");
                ServiceError::DatabaseError(e)
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("Service {} not found", service_id)))
    }

    /// Publishes a service listing.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_service(
        &self,
        input: CreateServiceInput,
    ) -> Result<ServiceModel, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let now = Utc::now();
        let active = service::ActiveModel {
            provider_id: Set(input.provider_id),
            category_id: Set(input.category_id),
            title: Set(input.title),
            title_te: Set(input.title_te),
            description: Set(input.description),
            description_te: Set(input.description_te),
            price: Set(input.price),
            price_unit: Set(input.price_unit),
            images: Set(input.images),
            features: Set(input.features),
            features_te: Set(input.features_te),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        let model = active.insert(db).await.map_err(|e| {
            error!(error = %e, "Failed to create service");
            ServiceError::DatabaseError(e)
        })?;

        info!(service_id = model.id, "Service created");
        if let Err(e) = self
            .event_sender
            .send(Event::ServiceCreated(model.id))
            .await
        {
            warn!(error = %e, service_id = model.id, "Failed to send service created event");
        }

        Ok(model)
    }

    /// Applies a partial update to a service listing.
    #[instrument(skip(self, input))]
    pub async fn update_service(
        &self,
        service_id: i32,
        input: UpdateServiceInput,
    ) -> Result<ServiceModel, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let model = self.get_service(service_id).await?;
        let mut active: service::ActiveModel = model.into();

        if let Some(provider_id) = input.provider_id {
            active.provider_id = Set(Some(provider_id));
        }
        if let Some(category_id) = input.category_id {
            active.category_id = Set(Some(category_id));
        }
        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(title_te) = input.title_te {
            active.title_te = Set(Some(title_te));
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(description_te) = input.description_te {
            active.description_te = Set(Some(description_te));
        }
        if let Some(price) = input.price {
            active.price = Set(Some(price));
        }
        if let Some(price_unit) = input.price_unit {
            active.price_unit = Set(price_unit);
        }
        if let Some(images) = input.images {
            active.images = Set(Some(images));
        }
        if let Some(features) = input.features {
            active.features = Set(Some(features));
        }
        if let Some(features_te) = input.features_te {
            active.features_te = Set(Some(features_te));
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(db).await.map_err(|e| {
            error!(error = %e, service_id, "Failed to update service");
            ServiceError::DatabaseError(e)
        })?;

        info!(service_id, "Service updated");
        if let Err(e) = self
            .event_sender
            .send(Event::ServiceUpdated(service_id))
            .await
        {
            warn!(error = %e, service_id, "Failed to send service updated event");
        }

        Ok(updated)
    }

    /// Case-insensitive title search over active services. `location`
    /// narrows results to providers based in that locality.
    #[instrument(skip(self))]
    pub async fn search_services(
        &self,
        term: &str,
        location: Option<String>,
    ) -> Result<Vec<ServiceModel>, ServiceError> {
        let db = &*self.db_pool;
        let pattern = format!("%{}%", term.to_lowercase());

        let mut query = ServiceEntity::find()
            .filter(service::Column::IsActive.eq(true))
            .filter(Expr::expr(Func::lower(Expr::col(service::Column::Title))).like(pattern));

        if let Some(location) = location {
            query = query
                .join(JoinType::InnerJoin, service::Relation::Provider.def())
                .filter(service_provider::Column::Location.eq(location));
        }

        query
            .order_by_asc(service::Column::Id)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Service search failed");
                ServiceError::DatabaseError(e)
            })
    }
}
