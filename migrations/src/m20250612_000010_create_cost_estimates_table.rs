use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // user_id is nullable: estimates can be requested before signing in.
        manager
            .create_table(
                Table::create()
                    .table(CostEstimates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CostEstimates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CostEstimates::UserId).string().null())
                    .col(ColumnDef::new(CostEstimates::RoomType).string().not_null())
                    .col(
                        ColumnDef::new(CostEstimates::RoomSize)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CostEstimates::ServiceType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CostEstimates::QualityLevel)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CostEstimates::MaterialCost)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CostEstimates::LaborCost)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CostEstimates::TotalCost)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(ColumnDef::new(CostEstimates::Location).string().null())
                    .col(
                        ColumnDef::new(CostEstimates::EstimateDetails)
                            .json_binary()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CostEstimates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cost_estimates_user_id")
                            .from(CostEstimates::Table, CostEstimates::UserId)
                            .to(
                                super::m20250612_000001_create_users_table::Users::Table,
                                super::m20250612_000001_create_users_table::Users::Id,
                            ),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CostEstimates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CostEstimates {
    Table,
    Id,
    UserId,
    RoomType,
    RoomSize,
    ServiceType,
    QualityLevel,
    MaterialCost,
    LaborCost,
    TotalCost,
    Location,
    EstimateDetails,
    CreatedAt,
}
