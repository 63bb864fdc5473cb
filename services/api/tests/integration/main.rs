mod helpers;

mod account_test;
mod order_test;
mod router_test;
mod transaction_test;
