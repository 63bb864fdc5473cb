use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Logistics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Logistics::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Logistics::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Logistics::Name).string().not_null())
                    .col(
                        ColumnDef::new(Logistics::Address)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Logistics::About)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Logistics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Logistics::Table, Logistics::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Logistics::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Logistics {
    Table,
    Id,
    UserId,
    Name,
    Address,
    About,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
