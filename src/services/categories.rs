use crate::{
    db::DbPool,
    entities::service_category::{self, Entity as CategoryEntity, Model as CategoryModel},
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
    pub name_te: Option<String>,
    pub description: Option<String>,
    pub description_te: Option<String>,
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Service for the category taxonomy.
#[derive(Clone)]
pub struct CategoryService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl CategoryService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Lists active categories in insertion order.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<CategoryModel>, ServiceError> {
        let db = &*self.db_pool;

        CategoryEntity::find()
            .filter(service_category::Column::IsActive.eq(true))
            .order_by_asc(service_category::Column::Id)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list service categories");
                ServiceError::DatabaseError(e)
            })
    }

    /// Creates a category.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> Result<CategoryModel, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let active = service_category::ActiveModel {
            name: Set(input.name),
            name_te: Set(input.name_te),
            description: Set(input.description),
            description_te: Set(input.description_te),
            icon: Set(input.icon),
            is_active: Set(input.is_active),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active.insert(db).await.map_err(|e| {
            error!(error = %e, "Failed to create service category");
            ServiceError::DatabaseError(e)
        })?;

        info!(category_id = model.id, "Service category created");
        if let Err(e) = self
            .event_sender
            .send(Event::CategoryCreated(model.id))
            .await
        {
            warn!(error = %e, category_id = model.id, "Failed to send category created event");
        }

        Ok(model)
    }
}
