use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FurnitureProducts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FurnitureProducts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::ProviderId)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(FurnitureProducts::Name).string().not_null())
                    .col(ColumnDef::new(FurnitureProducts::NameTe).string().null())
                    .col(
                        ColumnDef::new(FurnitureProducts::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::DescriptionTe)
                            .text()
                            .null(),
                    )
                    // Free-text product category: sofa, table, chair, wardrobe, ...
                    .col(
                        ColumnDef::new(FurnitureProducts::Category)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::Price)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::DiscountPrice)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::Images)
                            .json_binary()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::Materials)
                            .json_binary()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::Dimensions)
                            .json_binary()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::Colors)
                            .json_binary()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::InStock)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::StockQuantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::Rating)
                            .decimal_len(3, 2)
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::ReviewCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FurnitureProducts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_furniture_products_provider_id")
                            .from(FurnitureProducts::Table, FurnitureProducts::ProviderId)
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
            .drop_table(Table::drop().table(FurnitureProducts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FurnitureProducts {
    Table,
    Id,
    ProviderId,
    Name,
    NameTe,
    Description,
    DescriptionTe,
    Category,
    Price,
    DiscountPrice,
    Images,
    Materials,
    Dimensions,
    Colors,
    InStock,
    StockQuantity,
    Rating,
    ReviewCount,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
