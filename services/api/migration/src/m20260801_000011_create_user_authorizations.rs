use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAuthorizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserAuthorizations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserAuthorizations::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserAuthorizations::AccountName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserAuthorizations::AuthorizationCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserAuthorizations::CardType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserAuthorizations::Last4).string().not_null())
                    .col(
                        ColumnDef::new(UserAuthorizations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserAuthorizations::Table, UserAuthorizations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAuthorizations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserAuthorizations {
    Table,
    Id,
    UserId,
    AccountName,
    AuthorizationCode,
    CardType,
    Last4,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
