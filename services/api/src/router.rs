use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use shipway_core::health::{healthz, readyz};
use shipway_core::middleware::request_id_layer;

use crate::handlers::{
    account::{get_me, get_user, list_users, login_check, mark_verified, register, update_me},
    bank_account::{get_bank_account, list_authorizations, upsert_bank_account},
    driver::{
        assign_order, create_driver, delete_driver, get_driver, list_drivers,
        list_verified_drivers, search_drivers, update_driver,
    },
    logistic::update_logistic,
    order::{
        create_order, delete_order, get_order, list_orders, list_orders_for_offer,
        list_recent_orders,
    },
    package::{
        cargo_types, create_package, get_package, get_package_any, get_package_for_order,
        get_package_offers, list_packages, search_packages, track_package, update_package,
        update_package_any, update_package_for_order,
    },
    price_package::{create_price_package, delete_price_package, update_price_package},
    transaction::{
        callback, create_transaction, get_payment, list_payments, list_payments_by_status,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/accounts/register", post(register))
        .route("/accounts/login/check", post(login_check))
        .route("/accounts/users/{user_id}/mark-verified", post(mark_verified))
        .route("/accounts/users", get(list_users))
        .route("/accounts/users/{user_id}", get(get_user))
        .route("/accounts/me", get(get_me))
        .route("/accounts/me", patch(update_me))
        // Packages
        .route("/packages", get(list_packages))
        .route("/packages/search/by-tracking-code", get(search_packages))
        .route("/packages/create", post(create_package))
        .route("/packages/create-order", post(create_order))
        .route("/packages/cargo-types", get(cargo_types))
        .route("/packages/get-price-packages/{tracking_code}", get(get_package_offers))
        .route("/packages/rud/{tracking_code}", get(get_package_for_order))
        .route("/packages/rud/{tracking_code}", patch(update_package_for_order))
        .route("/packages/rud/pkg-code/{tracking_code}", get(get_package))
        .route("/packages/rud/pkg-code/{tracking_code}", patch(update_package))
        .route("/packages/rud/any/pkg-code/{tracking_code}", get(get_package_any))
        .route("/packages/rud/any/pkg-code/{tracking_code}", patch(update_package_any))
        .route("/packages/track/{tracking_code}", get(track_package))
        // Orders
        .route("/orders", get(list_orders))
        .route("/orders/detail/{tracking_code}", get(get_order))
        .route("/orders/detail/{tracking_code}", delete(delete_order))
        .route("/orders/logistics/recent", get(list_recent_orders))
        // Price packages
        .route("/price-packages", post(create_price_package))
        .route("/price-packages/{tracking_code}", patch(update_price_package))
        .route("/price-packages/{tracking_code}", delete(delete_price_package))
        .route("/price-packages/{tracking_code}/orders", get(list_orders_for_offer))
        // Logistics
        .route("/logistics", patch(update_logistic))
        // Drivers
        .route("/drivers", get(list_drivers))
        .route("/drivers", post(create_driver))
        .route("/drivers/search", get(search_drivers))
        .route("/drivers/verified", get(list_verified_drivers))
        .route("/drivers/assign-order", post(assign_order))
        .route("/drivers/{tracking_code}", get(get_driver))
        .route("/drivers/{tracking_code}", patch(update_driver))
        .route("/drivers/{tracking_code}", delete(delete_driver))
        // Transactions
        .route("/transactions/{tracking_code}", post(create_transaction))
        .route("/callback", get(callback))
        // Payments
        .route("/payments", get(list_payments))
        .route("/payments/status/{status}", get(list_payments_by_status))
        .route("/payments/{tracking_code}", get(get_payment))
        // Authorizations
        .route("/authorizations", get(list_authorizations))
        // Bank account
        .route("/bank-account", get(get_bank_account))
        .route("/bank-account", patch(upsert_bank_account))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
