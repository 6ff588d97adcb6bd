use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FurnitureOrderItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FurnitureOrderItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrderItems::OrderId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrderItems::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrderItems::Quantity)
                            .integer()
                            .not_null(),
                    )
                    // Unit price at order time, frozen against later product edits.
                    .col(
                        ColumnDef::new(FurnitureOrderItems::Price)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrderItems::SelectedColor)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrderItems::SelectedMaterial)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureOrderItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_furniture_order_items_order_id")
                            .from(FurnitureOrderItems::Table, FurnitureOrderItems::OrderId)
                            .to(
                                super::m20250612_000007_create_furniture_orders_table::FurnitureOrders::Table,
                                super::m20250612_000007_create_furniture_orders_table::FurnitureOrders::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_furniture_order_items_product_id")
                            .from(
                                FurnitureOrderItems::Table,
                                FurnitureOrderItems::ProductId,
                            )
                            .to(
                                super::m20250612_000005_create_furniture_products_table::FurnitureProducts::Table,
                                super::m20250612_000005_create_furniture_products_table::FurnitureProducts::Id,
                            ),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FurnitureOrderItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FurnitureOrderItems {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    Price,
    SelectedColor,
    SelectedMaterial,
    CreatedAt,
}
