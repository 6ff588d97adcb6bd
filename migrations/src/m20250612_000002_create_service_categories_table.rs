use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceCategories::Name).string().not_null())
                    .col(ColumnDef::new(ServiceCategories::NameTe).string().null())
                    .col(
                        ColumnDef::new(ServiceCategories::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ServiceCategories::DescriptionTe)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(ServiceCategories::Icon).string().null())
                    .col(
                        ColumnDef::new(ServiceCategories::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ServiceCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceCategories {
    Table,
    Id,
    Name,
    NameTe,
    Description,
    DescriptionTe,
    Icon,
    IsActive,
    CreatedAt,
}
