pub mod account;
pub mod bank_account;
pub mod driver;
pub mod logistic;
pub mod order;
pub mod package;
pub mod price_package;
pub mod transaction;
