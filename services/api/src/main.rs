use sea_orm::Database;
use tracing::info;

use shipway_api::config::ApiConfig;
use shipway_api::infra::gateway::HttpPaymentGateway;
use shipway_api::router::build_router;
use shipway_api::state::AppState;

#[tokio::main]
async fn main() {
    shipway_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let gateway = HttpPaymentGateway::new(&config.gateway_base_url, &config.gateway_secret_key);

    let state = AppState {
        db,
        gateway,
        api_key: config.api_key,
        public_base_url: config.public_base_url,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
