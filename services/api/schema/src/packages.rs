use sea_orm::entity::prelude::*;

/// Shipment declared by a customer, before and after it is ordered.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub tracking_code: String,
    pub user_id: Uuid,
    pub cargo_name: String,
    pub cargo_type: String,
    pub weight: Decimal,
    pub quantity: i32,
    pub pickup_location: String,
    pub delivery_location: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_one = "super::orders::Entity")]
    Order,
    #[sea_orm(has_many = "super::package_price_packages::Entity")]
    PackagePricePackages,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::price_packages::Entity> for Entity {
    fn to() -> RelationDef {
        super::package_price_packages::Relation::PricePackage.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::package_price_packages::Relation::Package
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
