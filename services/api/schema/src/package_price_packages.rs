use sea_orm::entity::prelude::*;

/// Join table recording which route offers matched a package at
/// creation time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "package_price_packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub package_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub price_package_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::packages::Entity",
        from = "Column::PackageId",
        to = "super::packages::Column::Id"
    )]
    Package,
    #[sea_orm(
        belongs_to = "super::price_packages::Entity",
        from = "Column::PricePackageId",
        to = "super::price_packages::Column::Id"
    )]
    PricePackage,
}

impl Related<super::packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Package.def()
    }
}

impl Related<super::price_packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PricePackage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
