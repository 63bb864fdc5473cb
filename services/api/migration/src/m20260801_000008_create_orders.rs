use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Orders::TrackingCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    // One live order per package; route re-selection must go
                    // through delete-then-insert.
                    .col(ColumnDef::new(Orders::PackageId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Orders::PricePackageId).uuid().not_null())
                    .col(ColumnDef::new(Orders::DriverId).uuid())
                    .col(ColumnDef::new(Orders::Price).decimal_len(12, 2).not_null())
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Orders::Table, Orders::PackageId)
                            .to(Packages::Table, Packages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Orders::Table, Orders::PricePackageId)
                            .to(PricePackages::Table, PricePackages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Orders::Table, Orders::DriverId)
                            .to(Drivers::Table, Drivers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
    TrackingCode,
    PackageId,
    PricePackageId,
    DriverId,
    Price,
    CreatedAt,
}

#[derive(Iden)]
enum Packages {
    Table,
    Id,
}

#[derive(Iden)]
enum PricePackages {
    Table,
    Id,
}

#[derive(Iden)]
enum Drivers {
    Table,
    Id,
}
