//! SeaORM entities for the api service database.
//!
//! One module per table. Keep these in sync with the migrations in
//! `services/api/migration`.

pub mod bank_accounts;
pub mod drivers;
pub mod logistics;
pub mod orders;
pub mod outbox_events;
pub mod package_price_packages;
pub mod packages;
pub mod price_packages;
pub mod profiles;
pub mod transactions;
pub mod user_authorizations;
pub mod users;
