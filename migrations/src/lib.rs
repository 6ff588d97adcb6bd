pub use sea_orm_migration::prelude::*;

mod m20250612_000001_create_users_table;
mod m20250612_000002_create_service_categories_table;
mod m20250612_000003_create_service_providers_table;
mod m20250612_000004_create_services_table;
mod m20250612_000005_create_furniture_products_table;
mod m20250612_000006_create_bookings_table;
mod m20250612_000007_create_furniture_orders_table;
mod m20250612_000008_create_furniture_order_items_table;
mod m20250612_000009_create_reviews_table;
mod m20250612_000010_create_cost_estimates_table;
mod m20250720_000011_add_listing_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_create_users_table::Migration),
            Box::new(m20250612_000002_create_service_categories_table::Migration),
            Box::new(m20250612_000003_create_service_providers_table::Migration),
            Box::new(m20250612_000004_create_services_table::Migration),
            Box::new(m20250612_000005_create_furniture_products_table::Migration),
            Box::new(m20250612_000006_create_bookings_table::Migration),
            Box::new(m20250612_000007_create_furniture_orders_table::Migration),
            Box::new(m20250612_000008_create_furniture_order_items_table::Migration),
            Box::new(m20250612_000009_create_reviews_table::Migration),
            Box::new(m20250612_000010_create_cost_estimates_table::Migration),
            Box::new(m20250720_000011_add_listing_indexes::Migration),
        ]
    }
}
