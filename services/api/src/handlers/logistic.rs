use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use shipway_auth_types::identity::IdentityHeaders;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::logistic::{UpdateLogisticInput, UpdateLogisticUseCase};

// ── PATCH /logistics ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateLogisticRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
}

pub async fn update_logistic(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<UpdateLogisticRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let uc = UpdateLogisticUseCase {
        repo: state.logistic_repo(),
    };
    uc.execute(
        identity.user_id,
        UpdateLogisticInput {
            name: body.name,
            address: body.address,
            about: body.about,
        },
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
