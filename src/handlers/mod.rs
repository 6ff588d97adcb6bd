pub mod auth;
pub mod bookings;
pub mod categories;
pub mod common;
pub mod estimates;
pub mod furniture;
pub mod orders;
pub mod payments;
pub mod providers;
pub mod reviews;
pub mod search;
pub mod services;

use crate::db::DbPool;
use crate::events::EventSender;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<crate::services::users::UserService>,
    pub categories: Arc<crate::services::categories::CategoryService>,
    pub providers: Arc<crate::services::providers::ProviderService>,
    pub catalog: Arc<crate::services::catalog::ServiceCatalogService>,
    pub furniture: Arc<crate::services::furniture::FurnitureProductService>,
    pub bookings: Arc<crate::services::bookings::BookingService>,
    pub orders: Arc<crate::services::orders::FurnitureOrderService>,
    pub reviews: Arc<crate::services::reviews::ReviewService>,
    pub estimates: Arc<crate::services::estimating::EstimateService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            users: Arc::new(crate::services::users::UserService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            categories: Arc::new(crate::services::categories::CategoryService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            providers: Arc::new(crate::services::providers::ProviderService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            catalog: Arc::new(crate::services::catalog::ServiceCatalogService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            furniture: Arc::new(crate::services::furniture::FurnitureProductService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            bookings: Arc::new(crate::services::bookings::BookingService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            orders: Arc::new(crate::services::orders::FurnitureOrderService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            reviews: Arc::new(crate::services::reviews::ReviewService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            estimates: Arc::new(crate::services::estimating::EstimateService::new(
                db_pool,
                event_sender,
            )),
        }
    }
}
