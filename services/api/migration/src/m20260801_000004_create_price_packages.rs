use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PricePackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PricePackages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PricePackages::TrackingCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PricePackages::LogisticId).uuid().not_null())
                    .col(
                        ColumnDef::new(PricePackages::PickupLocation)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PricePackages::DeliveryLocation)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PricePackages::Price)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PricePackages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PricePackages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PricePackages::Table, PricePackages::LogisticId)
                            .to(Logistics::Table, Logistics::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Matching scans filter on the route pair.
        manager
            .create_index(
                Index::create()
                    .table(PricePackages::Table)
                    .col(PricePackages::PickupLocation)
                    .col(PricePackages::DeliveryLocation)
                    .name("idx_price_packages_pickup_delivery")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PricePackages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PricePackages {
    Table,
    Id,
    TrackingCode,
    LogisticId,
    PickupLocation,
    DeliveryLocation,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Logistics {
    Table,
    Id,
}
