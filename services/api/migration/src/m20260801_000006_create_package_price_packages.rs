use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PackagePricePackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PackagePricePackages::PackageId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PackagePricePackages::PricePackageId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PackagePricePackages::PackageId)
                            .col(PackagePricePackages::PricePackageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                PackagePricePackages::Table,
                                PackagePricePackages::PackageId,
                            )
                            .to(Packages::Table, Packages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                PackagePricePackages::Table,
                                PackagePricePackages::PricePackageId,
                            )
                            .to(PricePackages::Table, PricePackages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PackagePricePackages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PackagePricePackages {
    Table,
    PackageId,
    PricePackageId,
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
