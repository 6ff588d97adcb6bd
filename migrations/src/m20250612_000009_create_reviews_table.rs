use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A review targets exactly one of provider / service / product.
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::UserId).string().not_null())
                    .col(ColumnDef::new(Reviews::ProviderId).integer().null())
                    .col(ColumnDef::new(Reviews::ServiceId).integer().null())
                    .col(ColumnDef::new(Reviews::ProductId).integer().null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::Comment).text().null())
                    .col(ColumnDef::new(Reviews::CommentTe).text().null())
                    .col(
                        ColumnDef::new(Reviews::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_user_id")
                            .from(Reviews::Table, Reviews::UserId)
                            .to(
                                super::m20250612_000001_create_users_table::Users::Table,
                                super::m20250612_000001_create_users_table::Users::Id,
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_provider_id")
                            .from(Reviews::Table, Reviews::ProviderId)
                            .to(
                                super::m20250612_000003_create_service_providers_table::ServiceProviders::Table,
                                super::m20250612_000003_create_service_providers_table::ServiceProviders::Id,
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_service_id")
                            .from(Reviews::Table, Reviews::ServiceId)
                            .to(
                                super::m20250612_000004_create_services_table::Services::Table,
                                super::m20250612_000004_create_services_table::Services::Id,
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_product_id")
                            .from(Reviews::Table, Reviews::ProductId)
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
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    UserId,
    ProviderId,
    ServiceId,
    ProductId,
    Rating,
    Comment,
    CommentTe,
    IsVerified,
    CreatedAt,
}
