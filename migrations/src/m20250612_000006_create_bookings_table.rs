use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::UserId).string().not_null())
                    .col(ColumnDef::new(Bookings::ServiceId).integer().null())
                    .col(ColumnDef::new(Bookings::ProviderId).integer().null())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Bookings::ScheduledDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::EstimatedCost)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::FinalCost)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(ColumnDef::new(Bookings::Notes).text().null())
                    .col(ColumnDef::new(Bookings::CustomerName).string().not_null())
                    .col(ColumnDef::new(Bookings::CustomerPhone).string().not_null())
                    .col(ColumnDef::new(Bookings::CustomerEmail).string().null())
                    .col(ColumnDef::new(Bookings::Location).string().not_null())
                    .col(
                        ColumnDef::new(Bookings::ProjectDetails)
                            .json_binary()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_user_id")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(
                                super::m20250612_000001_create_users_table::Users::Table,
                                super::m20250612_000001_create_users_table::Users::Id,
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_service_id")
                            .from(Bookings::Table, Bookings::ServiceId)
                            .to(
                                super::m20250612_000004_create_services_table::Services::Table,
                                super::m20250612_000004_create_services_table::Services::Id,
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_provider_id")
                            .from(Bookings::Table, Bookings::ProviderId)
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
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    UserId,
    ServiceId,
    ProviderId,
    Status,
    ScheduledDate,
    EstimatedCost,
    FinalCost,
    Notes,
    CustomerName,
    CustomerPhone,
    CustomerEmail,
    Location,
    ProjectDetails,
    CreatedAt,
    UpdatedAt,
}
