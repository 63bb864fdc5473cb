use sea_orm::entity::prelude::*;

/// Account record: credentials live elsewhere, this is the identity row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub active: bool,
    pub staff: bool,
    pub admin: bool,
    pub verified_email: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profiles::Entity")]
    Profile,
    #[sea_orm(has_one = "super::logistics::Entity")]
    Logistic,
    #[sea_orm(has_many = "super::packages::Entity")]
    Packages,
    #[sea_orm(has_one = "super::drivers::Entity")]
    Driver,
    #[sea_orm(has_one = "super::bank_accounts::Entity")]
    BankAccount,
    #[sea_orm(has_many = "super::user_authorizations::Entity")]
    UserAuthorizations,
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::logistics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logistic.def()
    }
}

impl Related<super::packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Packages.def()
    }
}

impl Related<super::drivers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl Related<super::bank_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BankAccount.def()
    }
}

impl Related<super::user_authorizations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAuthorizations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
