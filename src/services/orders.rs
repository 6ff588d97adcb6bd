use crate::{
    db::DbPool,
    entities::furniture_order::{
        self, Entity as OrderEntity, FurnitureOrderStatus, Model as OrderModel, PaymentMethod,
        PaymentStatus,
    },
    entities::furniture_order_item::{
        self, Entity as OrderItemEntity, Model as OrderItemModel,
    },
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use metrics::counter;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: i32,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    pub price: Decimal,
    pub selected_color: Option<String>,
    pub selected_material: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub provider_id: Option<i32>,
    pub total_amount: Decimal,
    pub payment_method: Option<PaymentMethod>,
    pub shipping_address: Option<serde_json::Value>,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "Customer phone is required"))]
    pub customer_phone: String,
    #[validate(email(message = "Customer email must be a valid address"))]
    pub customer_email: Option<String>,
    #[validate(length(min = 1, message = "An order needs at least one item"))]
    pub items: Vec<OrderItemInput>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderInput {
    pub status: Option<FurnitureOrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub stripe_payment_intent_id: Option<String>,
}

/// A furniture order together with its line items.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: OrderModel,
    pub items: Vec<OrderItemModel>,
}

/// Service for furniture orders. Order and items are written in one
/// transaction so a failed item insert never leaves a headless order.
#[derive(Clone)]
pub struct FurnitureOrderService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl FurnitureOrderService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Lists the caller's orders with their items, newest first. When
    /// `provider_id` is given the listing switches to that provider's
    /// incoming orders.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        user_id: &str,
        provider_id: Option<i32>,
    ) -> Result<Vec<OrderWithItems>, ServiceError> {
        let db = &*self.db_pool;

        let query = match provider_id {
            Some(provider_id) => {
                OrderEntity::find().filter(furniture_order::Column::ProviderId.eq(provider_id))
            }
            None => OrderEntity::find().filter(furniture_order::Column::UserId.eq(user_id)),
        };

        let rows = query
            .order_by_desc(furniture_order::Column::CreatedAt)
            .find_with_related(OrderItemEntity)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list furniture orders");
                ServiceError::DatabaseError(e)
            })?;

        Ok(rows
            .into_iter()
            .map(|(order, items)| OrderWithItems { order, items })
            .collect())
    }

    /// Fetches an order and its items.
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: i32) -> Result<OrderWithItems, ServiceError> {
        let db = &*self.db_pool;

        let order = OrderEntity::find_by_id(order_id)
            .one(db)
            .await
            .map_err(|e| {
                error!(error = %e, order_id, "Failed to fetch furniture order");
                ServiceError::DatabaseError(e)
            })?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Furniture order {} not found", order_id))
            })?;

        let items = OrderItemEntity::find()
            .filter(furniture_order_item::Column::OrderId.eq(order_id))
            .order_by_asc(furniture_order_item::Column::Id)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, order_id, "Failed to fetch order items");
                ServiceError::DatabaseError(e)
            })?;

        Ok(OrderWithItems { order, items })
    }

    /// Creates an order plus its items in a single transaction.
    #[instrument(skip(self, input), fields(user_id = %user_id, item_count = input.items.len()))]
    pub async fn create_order(
        &self,
        user_id: &str,
        input: CreateOrderInput,
    ) -> Result<OrderWithItems, ServiceError> {
        input.validate()?;
        for item in &input.items {
            item.validate()?;
        }

        let db = &*self.db_pool;
        let now = Utc::now();

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for order creation");
            ServiceError::DatabaseError(e)
        })?;

        let order_active = furniture_order::ActiveModel {
            user_id: Set(user_id.to_string()),
            provider_id: Set(input.provider_id),
            total_amount: Set(input.total_amount),
            status: Set(FurnitureOrderStatus::Pending),
            payment_status: Set(PaymentStatus::Pending),
            payment_method: Set(input.payment_method),
            stripe_payment_intent_id: Set(None),
            shipping_address: Set(input.shipping_address),
            customer_name: Set(input.customer_name),
            customer_phone: Set(input.customer_phone),
            customer_email: Set(input.customer_email),
            created_at: Set(now),
            updated_at: Set(Some(now)),
            ..Default::default()
        };

        let order = order_active.insert(&txn).await.map_err(|e| {
            error!(error = %e, "Failed to insert furniture order");
            ServiceError::DatabaseError(e)
        })?;

        let mut items = Vec::with_capacity(input.items.len());
        for item in input.items {
            let item_active = furniture_order_item::ActiveModel {
                order_id: Set(order.id),
                product_id: Set(item.product_id),
                quantity: Set(item.quantity),
                price: Set(item.price),
                selected_color: Set(item.selected_color),
                selected_material: Set(item.selected_material),
                created_at: Set(now),
                ..Default::default()
            };
            let stored = item_active.insert(&txn).await.map_err(|e| {
                error!(error = %e, order_id = order.id, "Failed to insert order item");
                ServiceError::DatabaseError(e)
            })?;
            items.push(stored);
        }

        txn.commit().await.map_err(|e| {
            error!(error = %e, order_id = order.id, "Failed to commit order creation");
            ServiceError::DatabaseError(e)
        })?;

        counter!("furniture_orders.created", 1);
        info!(order_id = order.id, user_id = %user_id, "Furniture order created");
        if let Err(e) = self
            .event_sender
            .send(Event::FurnitureOrderCreated(order.id))
            .await
        {
            warn!(error = %e, order_id = order.id, "Failed to send order created event");
        }

        Ok(OrderWithItems { order, items })
    }

    /// Applies a partial update (status and payment fields).
    #[instrument(skip(self, input))]
    pub async fn update_order(
        &self,
        order_id: i32,
        input: UpdateOrderInput,
    ) -> Result<OrderWithItems, ServiceError> {
        input.validate()?;

        let db = &*self.db_pool;
        let current = self.get_order(order_id).await?;
        let old_status = current.order.status;
        let mut active: furniture_order::ActiveModel = current.order.into();

        if let Some(status) = input.status {
            active.status = Set(status);
        }
        if let Some(payment_status) = input.payment_status {
            active.payment_status = Set(payment_status);
        }
        if let Some(payment_method) = input.payment_method {
            active.payment_method = Set(Some(payment_method));
        }
        if let Some(intent_id) = input.stripe_payment_intent_id {
            active.stripe_payment_intent_id = Set(Some(intent_id));
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(db).await.map_err(|e| {
            error!(error = %e, order_id, "Failed to update furniture order");
            ServiceError::DatabaseError(e)
        })?;

        info!(order_id, "Furniture order updated");
        if updated.status != old_status {
            if let Err(e) = self
                .event_sender
                .send(Event::FurnitureOrderStatusChanged {
                    order_id,
                    old_status: old_status.to_value(),
                    new_status: updated.status.to_value(),
                })
                .await
            {
                warn!(error = %e, order_id, "Failed to send order status event");
            }
        }

        Ok(OrderWithItems {
            order: updated,
            items: current.items,
        })
    }
}
