use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::FirstName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Profiles::LastName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Profiles::Phone).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Profiles::Address)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Profiles::City).string().not_null().default(""))
                    .col(ColumnDef::new(Profiles::State).string().not_null().default(""))
                    .col(ColumnDef::new(Profiles::Zip).string().not_null().default(""))
                    .col(ColumnDef::new(Profiles::About).string().not_null().default(""))
                    .col(ColumnDef::new(Profiles::AccountType).string())
                    .col(
                        ColumnDef::new(Profiles::Approved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Profiles {
    Table,
    UserId,
    Username,
    FirstName,
    LastName,
    Phone,
    Address,
    City,
    State,
    Zip,
    About,
    AccountType,
    Approved,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
