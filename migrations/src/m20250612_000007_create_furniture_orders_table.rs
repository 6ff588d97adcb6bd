use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FurnitureOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FurnitureOrders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FurnitureOrders::UserId).string().not_null())
                    .col(
                        ColumnDef::new(FurnitureOrders::ProviderId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::TotalAmount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::PaymentStatus)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::PaymentMethod)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::StripePaymentIntentId)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::ShippingAddress)
                            .json_binary()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::CustomerName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::CustomerPhone)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::CustomerEmail)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrders::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_furniture_orders_user_id")
                            .from(FurnitureOrders::Table, FurnitureOrders::UserId)
                            .to(
                                super::m20250612_000001_create_users_table::Users::Table,
                                super::m20250612_000001_create_users_table::Users::Id,
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_furniture_orders_provider_id")
                            .from(FurnitureOrders::Table, FurnitureOrders::ProviderId)
                            .to(
                                super::m20250612_000003_create_service_providers_table::ServiceProviders::Table,
                                super::m20250612_000003_create_service_providers_table::ServiceProviders::Id,
                            ),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FurnitureOrders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FurnitureOrders {
    Table,
    Id,
    UserId,
    ProviderId,
    TotalAmount,
    Status,
    PaymentStatus,
    PaymentMethod,
    StripePaymentIntentId,
    ShippingAddress,
    CustomerName,
    CustomerPhone,
    CustomerEmail,
    CreatedAt,
    UpdatedAt,
}
