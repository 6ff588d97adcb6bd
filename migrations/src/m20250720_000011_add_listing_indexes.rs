use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Provider listings filter by locality.
        manager
            .create_index(
                Index::create()
                    .name("idx_service_providers_location")
                    .table(ServiceProviders::Table)
                    .col(ServiceProviders::Location)
                    .to_owned(),
            )
            .await?;

        // Catalog listings filter by category and provider.
        manager
            .create_index(
                Index::create()
                    .name("idx_services_category_id")
                    .table(Services::Table)
                    .col(Services::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_services_provider_id")
                    .table(Services::Table)
                    .col(Services::ProviderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_furniture_products_provider_id")
                    .table(FurnitureProducts::Table)
                    .col(FurnitureProducts::ProviderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_furniture_products_category")
                    .table(FurnitureProducts::Table)
                    .col(FurnitureProducts::Category)
                    .to_owned(),
            )
            .await?;

        // Bookings and orders are listed per user, or per provider for merchants.
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_user_id")
                    .table(Bookings::Table)
                    .col(Bookings::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_provider_id")
                    .table(Bookings::Table)
                    .col(Bookings::ProviderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_furniture_orders_user_id")
                    .table(FurnitureOrders::Table)
                    .col(FurnitureOrders::UserId)
                    .to_owned(),
            )
            .await?;

        // Item loads join on order id.
        manager
            .create_index(
                Index::create()
                    .name("idx_furniture_order_items_order_id")
                    .table(FurnitureOrderItems::Table)
                    .col(FurnitureOrderItems::OrderId)
                    .to_owned(),
            )
            .await?;

        // Review lookups come keyed by any of the three targets.
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_provider_id")
                    .table(Reviews::Table)
                    .col(Reviews::ProviderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_service_id")
                    .table(Reviews::Table)
                    .col(Reviews::ServiceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_product_id")
                    .table(Reviews::Table)
                    .col(Reviews::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cost_estimates_user_id")
                    .table(CostEstimates::Table)
                    .col(CostEstimates::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_service_providers_location",
            "idx_services_category_id",
            "idx_services_provider_id",
            "idx_furniture_products_provider_id",
            "idx_furniture_products_category",
            "idx_bookings_user_id",
            "idx_bookings_provider_id",
            "idx_furniture_orders_user_id",
            "idx_furniture_order_items_order_id",
            "idx_reviews_provider_id",
            "idx_reviews_service_id",
            "idx_reviews_product_id",
            "idx_cost_estimates_user_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum ServiceProviders {
    Table,
    Location,
}

#[derive(Iden)]
enum Services {
    Table,
    ProviderId,
    CategoryId,
}

#[derive(Iden)]
enum FurnitureProducts {
    Table,
    ProviderId,
    Category,
}

#[derive(Iden)]
enum Bookings {
    Table,
    UserId,
    ProviderId,
}

#[derive(Iden)]
enum FurnitureOrders {
    Table,
    UserId,
}

#[derive(Iden)]
enum FurnitureOrderItems {
    Table,
    OrderId,
}

#[derive(Iden)]
enum Reviews {
    Table,
    ProviderId,
    ServiceId,
    ProductId,
}

#[derive(Iden)]
enum CostEstimates {
    Table,
    UserId,
}
