use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceProviders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceProviders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::BusinessName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::BusinessNameTe)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(ServiceProviders::Description).text().null())
                    .col(
                        ColumnDef::new(ServiceProviders::DescriptionTe)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::CategoryId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::Location)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceProviders::Phone).string().not_null())
                    .col(ColumnDef::new(ServiceProviders::Email).string().null())
                    .col(ColumnDef::new(ServiceProviders::Website).string().null())
                    .col(
                        ColumnDef::new(ServiceProviders::Experience)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::Rating)
                            .decimal_len(3, 2)
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::ReviewCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceProviders::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_providers_user_id")
                            .from(ServiceProviders::Table, ServiceProviders::UserId)
                            .to(
                                super::m20250612_000001_create_users_table::Users::Table,
                                super::m20250612_000001_create_users_table::Users::Id,
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_providers_category_id")
                            .from(ServiceProviders::Table, ServiceProviders::CategoryId)
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
            .drop_table(Table::drop().table(ServiceProviders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceProviders {
    Table,
    Id,
    UserId,
    BusinessName,
    BusinessNameTe,
    Description,
    DescriptionTe,
    CategoryId,
    Location,
    Phone,
    Email,
    Website,
    Experience,
    Rating,
    ReviewCount,
    IsVerified,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
