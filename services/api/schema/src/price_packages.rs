use sea_orm::entity::prelude::*;

/// Route offer published by a logistics company: a pickup/delivery pair
/// priced per unit of weight.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "price_packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub tracking_code: String,
    pub logistic_id: Uuid,
    pub pickup_location: String,
    pub delivery_location: String,
    pub price: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::logistics::Entity",
        from = "Column::LogisticId",
        to = "super::logistics::Column::Id"
    )]
    Logistic,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
    #[sea_orm(has_many = "super::package_price_packages::Entity")]
    PackagePricePackages,
}

impl Related<super::logistics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logistic.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::packages::Entity> for Entity {
    fn to() -> RelationDef {
        super::package_price_packages::Relation::Package.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::package_price_packages::Relation::PricePackage
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
