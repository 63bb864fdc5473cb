use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use shipway_auth_types::identity::IdentityHeaders;

use crate::domain::types::DriverContact;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::driver::{
    CreateDriverInput, CreateDriverUseCase, DeleteDriverUseCase, GetDriverUseCase,
    ListDriversUseCase, ListVerifiedDriversUseCase, SearchDriversUseCase, UpdateDriverInput,
    UpdateDriverUseCase,
};
use crate::usecase::order::{AssignDriverInput, AssignDriverUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DriverResponse {
    pub id: String,
    pub tracking_code: String,
    pub email: String,
    pub phone: String,
    pub verified: bool,
    pub active: bool,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<DriverContact> for DriverResponse {
    fn from(contact: DriverContact) -> Self {
        DriverResponse {
            id: contact.driver.id.to_string(),
            tracking_code: contact.driver.tracking_code,
            email: contact.email,
            phone: contact.phone,
            verified: contact.driver.verified,
            active: contact.driver.active,
            created_at: contact.driver.created_at,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct DriverListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub search: Option<String>,
}

// ── GET /drivers ─────────────────────────────────────────────────────────────

pub async fn list_drivers(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<DriverListQuery>,
) -> Result<Json<Vec<DriverResponse>>, ApiServiceError> {
    let page = shipway_domain::pagination::PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };
    let uc = ListDriversUseCase {
        logistics: state.logistic_repo(),
        drivers: state.driver_repo(),
    };
    let contacts = uc.execute(identity.user_id, page).await?;
    Ok(Json(
        contacts.into_iter().map(DriverResponse::from).collect(),
    ))
}

// ── GET /drivers/search ──────────────────────────────────────────────────────

pub async fn search_drivers(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<DriverListQuery>,
) -> Result<Json<Vec<DriverResponse>>, ApiServiceError> {
    let search = match query.search.as_deref() {
        Some(search) => search.to_owned(),
        None => return Err(ApiServiceError::MissingData),
    };
    let uc = SearchDriversUseCase {
        logistics: state.logistic_repo(),
        drivers: state.driver_repo(),
    };
    let contacts = uc.execute(identity.user_id, &search).await?;
    Ok(Json(
        contacts.into_iter().map(DriverResponse::from).collect(),
    ))
}

// ── GET /drivers/verified ────────────────────────────────────────────────────

pub async fn list_verified_drivers(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverResponse>>, ApiServiceError> {
    let uc = ListVerifiedDriversUseCase {
        logistics: state.logistic_repo(),
        drivers: state.driver_repo(),
    };
    let contacts = uc.execute(identity.user_id).await?;
    Ok(Json(
        contacts.into_iter().map(DriverResponse::from).collect(),
    ))
}

// ── POST /drivers ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateDriverRequest {
    pub email: String,
}

pub async fn create_driver(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateDriverRequest>,
) -> Result<(StatusCode, Json<DriverResponse>), ApiServiceError> {
    let uc = CreateDriverUseCase {
        logistics: state.logistic_repo(),
        users: state.user_repo(),
        drivers: state.driver_repo(),
    };
    let contact = uc
        .execute(identity.user_id, CreateDriverInput { email: body.email })
        .await?;
    Ok((StatusCode::CREATED, Json(contact.into())))
}

// ── GET /drivers/{tracking_code} ─────────────────────────────────────────────

pub async fn get_driver(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<DriverResponse>, ApiServiceError> {
    let uc = GetDriverUseCase {
        logistics: state.logistic_repo(),
        drivers: state.driver_repo(),
    };
    let contact = uc.execute(identity.user_id, &tracking_code).await?;
    Ok(Json(contact.into()))
}

// ── PATCH /drivers/{tracking_code} ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateDriverRequest {
    pub verified: Option<bool>,
    pub active: Option<bool>,
}

pub async fn update_driver(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    Json(body): Json<UpdateDriverRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let uc = UpdateDriverUseCase {
        logistics: state.logistic_repo(),
        drivers: state.driver_repo(),
    };
    uc.execute(
        identity.user_id,
        &tracking_code,
        UpdateDriverInput {
            verified: body.verified,
            active: body.active,
        },
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /drivers/{tracking_code} ──────────────────────────────────────────

pub async fn delete_driver(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<StatusCode, ApiServiceError> {
    let uc = DeleteDriverUseCase {
        logistics: state.logistic_repo(),
        drivers: state.driver_repo(),
    };
    uc.execute(identity.user_id, &tracking_code).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /drivers/assign-order ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AssignOrderRequest {
    pub driver_code: String,
    pub order_code: String,
}

pub async fn assign_order(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<AssignOrderRequest>,
) -> Result<Json<serde_json::Value>, ApiServiceError> {
    let uc = AssignDriverUseCase {
        logistics: state.logistic_repo(),
        drivers: state.driver_repo(),
        orders: state.order_repo(),
    };
    uc.execute(
        identity.user_id,
        AssignDriverInput {
            driver_code: body.driver_code,
            order_code: body.order_code,
        },
    )
    .await?;
    Ok(Json(serde_json::json!({ "message": "Success" })))
}
