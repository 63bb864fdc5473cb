use sea_orm::entity::prelude::*;

/// Order binding a package to the route offer its owner picked.
/// `package_id` is unique: a package has at most one live order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub tracking_code: String,
    #[sea_orm(unique)]
    pub package_id: Uuid,
    pub price_package_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub price: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
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
    #[sea_orm(
        belongs_to = "super::drivers::Entity",
        from = "Column::DriverId",
        to = "super::drivers::Column::Id"
    )]
    Driver,
    #[sea_orm(has_one = "super::transactions::Entity")]
    Transaction,
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

impl Related<super::drivers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
