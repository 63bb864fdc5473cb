/// Api service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3114). Env var: `API_PORT`.
    pub api_port: u16,
    /// Public base URL of this service, used to build the payment
    /// callback URL handed to the gateway (e.g. "https://api.shipway.example").
    pub public_base_url: String,
    /// Payment gateway API base URL (e.g. "https://api.flutterwave.com/v3").
    pub gateway_base_url: String,
    /// Payment gateway secret key, sent as a bearer token.
    pub gateway_secret_key: String,
    /// Shared key the identity edge presents on machine-to-machine
    /// endpoints (`x-shipway-api-key`).
    pub api_key: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            public_base_url: std::env::var("PUBLIC_BASE_URL").expect("PUBLIC_BASE_URL"),
            gateway_base_url: std::env::var("GATEWAY_BASE_URL").expect("GATEWAY_BASE_URL"),
            gateway_secret_key: std::env::var("GATEWAY_SECRET_KEY").expect("GATEWAY_SECRET_KEY"),
            api_key: std::env::var("API_KEY").expect("API_KEY"),
        }
    }
}
