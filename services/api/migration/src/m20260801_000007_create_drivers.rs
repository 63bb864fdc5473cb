use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drivers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Drivers::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Drivers::TrackingCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Drivers::LogisticId).uuid().not_null())
                    .col(ColumnDef::new(Drivers::UserId).uuid().not_null().unique_key())
                    .col(
                        ColumnDef::new(Drivers::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Drivers::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Drivers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Drivers::Table, Drivers::LogisticId)
                            .to(Logistics::Table, Logistics::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Drivers::Table, Drivers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drivers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Drivers {
    Table,
    Id,
    TrackingCode,
    LogisticId,
    UserId,
    Verified,
    Active,
    CreatedAt,
}

#[derive(Iden)]
enum Logistics {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
