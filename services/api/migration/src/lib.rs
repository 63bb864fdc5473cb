use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users;
mod m20260801_000002_create_profiles;
mod m20260801_000003_create_logistics;
mod m20260801_000004_create_price_packages;
mod m20260801_000005_create_packages;
mod m20260801_000006_create_package_price_packages;
mod m20260801_000007_create_drivers;
mod m20260801_000008_create_orders;
mod m20260801_000009_create_bank_accounts;
mod m20260801_000010_create_transactions;
mod m20260801_000011_create_user_authorizations;
mod m20260801_000012_create_outbox_events;
mod m20260801_000013_add_missing_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users::Migration),
            Box::new(m20260801_000002_create_profiles::Migration),
            Box::new(m20260801_000003_create_logistics::Migration),
            Box::new(m20260801_000004_create_price_packages::Migration),
            Box::new(m20260801_000005_create_packages::Migration),
            Box::new(m20260801_000006_create_package_price_packages::Migration),
            Box::new(m20260801_000007_create_drivers::Migration),
            Box::new(m20260801_000008_create_orders::Migration),
            Box::new(m20260801_000009_create_bank_accounts::Migration),
            Box::new(m20260801_000010_create_transactions::Migration),
            Box::new(m20260801_000011_create_user_authorizations::Migration),
            Box::new(m20260801_000012_create_outbox_events::Migration),
            Box::new(m20260801_000013_add_missing_indexes::Migration),
        ]
    }
}
