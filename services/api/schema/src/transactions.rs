use sea_orm::entity::prelude::*;

/// Payment attempt for an order. `reference` is the id we hand to the
/// gateway; `order_id` is unique so an order has at most one transaction.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub tracking_code: String,
    #[sea_orm(unique)]
    pub reference: String,
    #[sea_orm(unique)]
    pub order_id: Uuid,
    pub bank_account_id: Option<Uuid>,
    pub amount: Decimal,
    pub status: String,
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub redirect_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::bank_accounts::Entity",
        from = "Column::BankAccountId",
        to = "super::bank_accounts::Column::UserId"
    )]
    BankAccount,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::bank_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BankAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
