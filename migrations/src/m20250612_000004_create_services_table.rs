use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::ProviderId).integer().null())
                    .col(ColumnDef::new(Services::CategoryId).integer().null())
                    .col(ColumnDef::new(Services::Title).string().not_null())
                    .col(ColumnDef::new(Services::TitleTe).string().null())
                    .col(ColumnDef::new(Services::Description).text().null())
                    .col(ColumnDef::new(Services::DescriptionTe).text().null())
                    .col(ColumnDef::new(Services::Price).decimal_len(10, 2).null())
                    .col(
                        ColumnDef::new(Services::PriceUnit)
                            .string()
                            .not_null()
                            .default("per_project"),
                    )
                    .col(ColumnDef::new(Services::Images).json_binary().null())
                    .col(ColumnDef::new(Services::Features).json_binary().null())
                    .col(ColumnDef::new(Services::FeaturesTe).json_binary().null())
                    .col(
                        ColumnDef::new(Services::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_provider_id")
                            .from(Services::Table, Services::ProviderId)
                            .to(
                                super::m20250612_000003_create_service_providers_table::ServiceProviders::Table,
                                super::m20250612_000003_create_service_providers_table::ServiceProviders::Id,
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_category_id")
                            .from(Services::Table, Services::CategoryId)
                            .to(
                                super::m20250612_000002_create_service_categories_table::ServiceCategories::Table,
                                super::m20250612_000002_create_service_categories_table::ServiceCategories::Id,
                            ),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Services {
    Table,
    Id,
    ProviderId,
    CategoryId,
    Title,
    TitleTe,
    Description,
    DescriptionTe,
    Price,
    PriceUnit,
    Images,
    Features,
    FeaturesTe,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
