use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Packages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Packages::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Packages::TrackingCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Packages::UserId).uuid().not_null())
                    .col(ColumnDef::new(Packages::CargoName).string().not_null())
                    .col(ColumnDef::new(Packages::CargoType).string().not_null())
                    .col(
                        ColumnDef::new(Packages::Weight)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Packages::Quantity).integer().not_null())
                    .col(ColumnDef::new(Packages::PickupLocation).string().not_null())
                    .col(
                        ColumnDef::new(Packages::DeliveryLocation)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Packages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Packages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Packages::Table, Packages::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Packages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Packages {
    Table,
    Id,
    TrackingCode,
    UserId,
    CargoName,
    CargoType,
    Weight,
    Quantity,
    PickupLocation,
    DeliveryLocation,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
