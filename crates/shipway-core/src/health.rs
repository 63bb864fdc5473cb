use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

/// `GET /healthz` — liveness probe.
pub async fn healthz() -> (StatusCode, Json<HealthBody>) {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}

/// `GET /readyz` — readiness probe. A service that gates readiness on its
/// own dependencies mounts a handler of its own instead of this one.
pub async fn readyz() -> (StatusCode, Json<HealthBody>) {
    (StatusCode::OK, Json(HealthBody { status: "ready" }))
}
