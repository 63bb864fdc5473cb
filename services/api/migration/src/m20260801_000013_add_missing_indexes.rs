use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Packages::Table)
                    .col(Packages::UserId)
                    .name("idx_packages_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Orders::Table)
                    .col(Orders::PricePackageId)
                    .name("idx_orders_price_package_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Drivers::Table)
                    .col(Drivers::LogisticId)
                    .name("idx_drivers_logistic_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Transactions::Table)
                    .col(Transactions::BankAccountId)
                    .name("idx_transactions_bank_account_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(UserAuthorizations::Table)
                    .col(UserAuthorizations::UserId)
                    .name("idx_user_authorizations_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_authorizations_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_transactions_bank_account_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_drivers_logistic_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_orders_price_package_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_packages_user_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Packages {
    Table,
    UserId,
}

#[derive(Iden)]
enum Orders {
    Table,
    PricePackageId,
}

#[derive(Iden)]
enum Drivers {
    Table,
    LogisticId,
}

#[derive(Iden)]
enum Transactions {
    Table,
    BankAccountId,
}

#[derive(Iden)]
enum UserAuthorizations {
    Table,
    UserId,
}
