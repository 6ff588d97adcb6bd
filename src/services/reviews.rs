use crate::{
    db::DbPool,
    entities::furniture_product,
    entities::review::{self, Entity as ReviewEntity, Model as ReviewModel},
    entities::service_provider,
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use metrics::counter;
use rust_decimal::prelude::RoundingStrategy;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFilter {
    pub provider_id: Option<i32>,
    pub service_id: Option<i32>,
    pub product_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewInput {
    pub provider_id: Option<i32>,
    pub service_id: Option<i32>,
    pub product_id: Option<i32>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    pub comment: Option<String>,
    pub comment_te: Option<String>,
}

/// Service for reviews and the rating aggregates they drive.
///
/// A review insert and the recompute of the target's `rating` /
/// `review_count` happen in one transaction, so readers never observe a
/// count without its average.
#[derive(Clone)]
pub struct ReviewService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl ReviewService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Lists reviews matching the given target filters, newest first.
    #[instrument(skip(self))]
    pub async fn list_reviews(&self, filter: ReviewFilter) -> Result<Vec<ReviewModel>, ServiceError> {
        let db = &*self.db_pool;

        let mut query = ReviewEntity::find();
        if let Some(provider_id) = filter.provider_id {
            query = query.filter(review::Column::ProviderId.eq(provider_id));
        }
        if let Some(service_id) = filter.service_id {
            query = query.filter(review::Column::ServiceId.eq(service_id));
        }
        if let Some(product_id) = filter.product_id {
            query = query.filter(review::Column::ProductId.eq(product_id));
        }

        query
            .order_by_desc(review::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list reviews");
                ServiceError::DatabaseError(e)
            })
    }

    /// Records a review and recomputes the aggregates of whichever targets
    /// it names.
    #[instrument(skip(self, input), fields(user_id = %user_id, rating = input.rating))]
    pub async fn create_review(
        &self,
        user_id: &str,
        input: CreateReviewInput,
    ) -> Result<ReviewModel, ServiceError> {
        input.validate()?;
        if input.provider_id.is_none() && input.service_id.is_none() && input.product_id.is_none()
        {
            return Err(ServiceError::InvalidInput(
                "A review must name a providerId, serviceId or productId".to_string(),
            ));
        }

        let db = &*self.db_pool;

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for review creation");
            ServiceError::DatabaseError(e)
        })?;

        let active = review::ActiveModel {
            user_id: Set(user_id.to_string()),
            provider_id: Set(input.provider_id),
            service_id: Set(input.service_id),
            product_id: Set(input.product_id),
            rating: Set(input.rating),
            comment: Set(input.comment),
            comment_te: Set(input.comment_te),
            is_verified: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active.insert(&txn).await.map_err(|e| {
            error!(error = %e, "Failed to insert review");
            ServiceError::DatabaseError(e)
        })?;

        if let Some(provider_id) = model.provider_id {
            self.recompute_provider_aggregate(&txn, provider_id).await?;
        }
        if let Some(product_id) = model.product_id {
            self.recompute_product_aggregate(&txn, product_id).await?;
        }

        txn.commit().await.map_err(|e| {
            error!(error = %e, review_id = model.id, "Failed to commit review creation");
            ServiceError::DatabaseError(e)
        })?;

        counter!("reviews.created", 1);
        info!(review_id = model.id, "Review created");
        if let Some(provider_id) = model.provider_id {
            if let Err(e) = self
                .event_sender
                .send(Event::ReviewCreated {
                    review_id: model.id,
                    provider_id,
                })
                .await
            {
                warn!(error = %e, review_id = model.id, "Failed to send review created event");
            }
        }

        Ok(model)
    }

    async fn recompute_provider_aggregate(
        &self,
        txn: &DatabaseTransaction,
        provider_id: i32,
    ) -> Result<(), ServiceError> {
        let reviews = ReviewEntity::find()
            .filter(review::Column::ProviderId.eq(provider_id))
            .all(txn)
            .await
            .map_err(|e| {
                error!(error = %e, provider_id, "Failed to load reviews for aggregate");
                ServiceError::DatabaseError(e)
            })?;

        let (rating, count) = average_rating(&reviews);

        let provider = service_provider::Entity::find_by_id(provider_id)
            .one(txn)
            .await
            .map_err(|e| {
                error!(error = %e, provider_id, "Failed to load provider for aggregate");
                ServiceError::DatabaseError(e)
            })?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Service provider {} not found", provider_id))
            })?;

        let mut active: service_provider::ActiveModel = provider.into();
        active.rating = Set(rating);
        active.review_count = Set(count);
        active.updated_at = Set(Some(Utc::now()));
        active.update(txn).await.map_err(|e| {
            error!(error = %e, provider_id, "Failed to write provider aggregate");
            ServiceError::DatabaseError(e)
        })?;

        Ok(())
    }

    async fn recompute_product_aggregate(
        &self,
        txn: &DatabaseTransaction,
        product_id: i32,
    ) -> Result<(), ServiceError> {
        let reviews = ReviewEntity::find()
            .filter(review::Column::ProductId.eq(product_id))
            .all(txn)
            .await
            .map_err(|e| {
                error!(error = %e, product_id, "Failed to load reviews for aggregate");
                ServiceError::DatabaseError(e)
            })?;

        let (rating, count) = average_rating(&reviews);

        let product = furniture_product::Entity::find_by_id(product_id)
            .one(txn)
            .await
            .map_err(|e| {
                error!(error = %e, product_id, "Failed to load product for aggregate");
                ServiceError::DatabaseError(e)
            })?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Furniture product {} not found", product_id))
            })?;

        let mut active: furniture_product::ActiveModel = product.into();
        active.rating = Set(rating);
        active.review_count = Set(count);
        active.updated_at = Set(Some(Utc::now()));
        active.update(txn).await.map_err(|e| {
            error!(error = %e, product_id, "Failed to write product aggregate");
            ServiceError::DatabaseError(e)
        })?;

        Ok(())
    }
}

/// Average rating to two decimals plus the review count. Zero reviews is
/// (0.00, 0), matching the column defaults.
fn average_rating(reviews: &[ReviewModel]) -> (Decimal, i32) {
    if reviews.is_empty() {
        return (Decimal::ZERO, 0);
    }
    let sum: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
    let average = Decimal::from(sum) / Decimal::from(reviews.len() as i64);
    let mut rounded = average.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Exact divisions come back at scale 0; pin the column's two decimals.
    rounded.rescale(2);
    (rounded, reviews.len() as i32)
}
