use crate::{
    db::DbPool,
    entities::furniture_product::{self, Entity as ProductEntity, Model as ProductModel},
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub provider_id: Option<i32>,
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    pub name_te: Option<String>,
    pub description: Option<String>,
    pub description_te: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub images: Option<serde_json::Value>,
    pub materials: Option<serde_json::Value>,
    pub dimensions: Option<serde_json::Value>,
    pub colors: Option<serde_json::Value>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub stock_quantity: i32,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductInput {
    pub provider_id: Option<i32>,
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    pub name: Option<String>,
    pub name_te: Option<String>,
    pub description: Option<String>,
    pub description_te: Option<String>,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub discount_price: Option<Decimal>,
    pub images: Option<serde_json::Value>,
    pub materials: Option<serde_json::Value>,
    pub dimensions: Option<serde_json::Value>,
    pub colors: Option<serde_json::Value>,
    pub in_stock: Option<bool>,
    pub stock_quantity: Option<i32>,
    pub is_active: Option<bool>,
}

/// Service for the furniture catalog.
#[derive(Clone)]
pub struct FurnitureProductService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl FurnitureProductService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Lists active products, optionally narrowed by provider and category.
    #[instrument(skip(self))]
    pub async fn list_active(
        &self,
        provider_id: Option<i32>,
        category: Option<String>,
    ) -> Result<Vec<ProductModel>, ServiceError> {
        let db = &*self.db_pool;

        let mut query = ProductEntity::find().filter(furniture_product::Column::IsActive.eq(true));
        if let Some(provider_id) = provider_id {
            query = query.filter(furniture_product::Column::ProviderId.eq(provider_id));
        }
        if let Some(category) = category {
            query = query.filter(furniture_product::Column::Category.eq(category));
        }

        query
            .order_by_asc(furniture_product::Column::Id)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list furniture products");
                ServiceError::DatabaseError(e)
            })
    }

    /// Fetches a product by id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: i32) -> Result<ProductModel, ServiceError> {
        let db = &*self.db_pool;

        ProductEntity::find_by_id(product_id)
            .one(db)
            .await
            .map_err(|e| {
                error!(error = %e, product_id, "Failed to fetch furniture product");
                ServiceError::DatabaseError(e)
            })?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Furniture product {} not found", product_id))
            })
    }

    /// Adds a product to the catalog.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<ProductModel, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let now = Utc::now();
        let active = furniture_product::ActiveModel {
            provider_id: Set(input.provider_id),
            name: Set(input.name),
            name_te: Set(input.name_te),
            description: Set(input.description),
            description_te: Set(input.description_te),
            category: Set(input.category),
            price: Set(input.price),
            discount_price: Set(input.discount_price),
            images: Set(input.images),
            materials: Set(input.materials),
            dimensions: Set(input.dimensions),
            colors: Set(input.colors),
            in_stock: Set(input.in_stock),
            stock_quantity: Set(input.stock_quantity),
            rating: Set(Decimal::ZERO),
            review_count: Set(0),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        let model = active.insert(db).await.map_err(|e| {
            error!(error = %e, "Failed to create furniture product");
            ServiceError::DatabaseError(e)
        })?;

        info!(product_id = model.id, "Furniture product created");
        if let Err(e) = self
            .event_sender
            .send(Event::ProductCreated(model.id))
            .await
        {
            warn!(error = %e, product_id = model.id, "Failed to send product created event");
        }

        Ok(model)
    }

    /// Applies a partial update to a product.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        product_id: i32,
        input: UpdateProductInput,
    ) -> Result<ProductModel, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let model = self.get_product(product_id).await?;
        let mut active: furniture_product::ActiveModel = model.into();

        if let Some(provider_id) = input.provider_id {
            active.provider_id = Set(Some(provider_id));
        }
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(name_te) = input.name_te {
            active.name_te = Set(Some(name_te));
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(description_te) = input.description_te {
            active.description_te = Set(Some(description_te));
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(price) = input.price {
            active.price = Set(price);
        }
        if let Some(discount_price) = input.discount_price {
            active.discount_price = Set(Some(discount_price));
        }
        if let Some(images) = input.images {
            active.images = Set(Some(images));
        }
        if let Some(materials) = input.materials {
            active.materials = Set(Some(materials));
        }
        if let Some(dimensions) = input.dimensions {
            active.dimensions = Set(Some(dimensions));
        }
        if let Some(colors) = input.colors {
            active.colors = Set(Some(colors));
        }
        if let Some(in_stock) = input.in_stock {
            active.in_stock = Set(in_stock);
        }
        if let Some(stock_quantity) = input.stock_quantity {
            active.stock_quantity = Set(stock_quantity);
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(db).await.map_err(|e| {
            error!(error = %e, product_id, "Failed to update furniture product");
            ServiceError::DatabaseError(e)
        })?;

        info!(product_id, "Furniture product updated");
        if let Err(e) = self
            .event_sender
            .send(Event::ProductUpdated(product_id))
            .await
        {
            warn!(error = %e, product_id, "Failed to send product updated event");
        }

        Ok(updated)
    }

    /// Case-insensitive name search over active products.
    #[instrument(skip(self))]
    pub async fn search_products(&self, term: &str) -> Result<Vec<ProductModel>, ServiceError> {
        let db = &*self.db_pool;
        let pattern = format!("%{}%", term.to_lowercase());

        ProductEntity::find()
            .filter(furniture_product::Column::IsActive.eq(true))
            .filter(
                Expr::expr(Func::lower(Expr::col(furniture_product::Column::Name))).like(pattern),
            )
            .order_by_asc(furniture_product::Column::Id)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Furniture search failed");
                ServiceError::DatabaseError(e)
            })
    }
}
