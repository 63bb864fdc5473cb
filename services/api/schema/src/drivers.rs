use sea_orm::entity::prelude::*;

/// Driver enrolled with a logistics company. The linked user account
/// carries the contact details.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub tracking_code: String,
    pub logistic_id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub verified: bool,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::logistics::Entity",
        from = "Column::LogisticId",
        to = "super::logistics::Column::Id"
    )]
    Logistic,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::logistics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logistic.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
