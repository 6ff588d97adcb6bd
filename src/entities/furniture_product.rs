use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Furniture catalog item. `category` is free text (sofa, table, chair,
/// wardrobe, ...) rather than an FK; `materials`, `dimensions` and `colors`
/// are JSON blobs shaped by the storefront.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "furniture_products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub provider_id: Option<i32>,
    pub name: String,
    pub name_te: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_te: Option<String>,
    pub category: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub images: Option<Json>,
    pub materials: Option<Json>,
    pub dimensions: Option<Json>,
    pub colors: Option<Json>,
    pub in_stock: bool,
    pub stock_quantity: i32,
    pub rating: Decimal,
    pub review_count: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_provider::Entity",
        from = "Column::ProviderId",
        to = "super::service_provider::Column::Id"
    )]
    Provider,
    #[sea_orm(has_many = "super::furniture_order_item::Entity")]
    OrderItems,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::service_provider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl Related<super::furniture_order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
