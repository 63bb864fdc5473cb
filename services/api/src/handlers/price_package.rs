use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shipway_auth_types::identity::IdentityHeaders;

use crate::domain::types::PricePackage;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::price_package::{
    CreatePricePackageInput, CreatePricePackageUseCase, DeletePricePackageUseCase,
    UpdatePricePackageInput, UpdatePricePackageUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PricePackageResponse {
    pub id: String,
    pub tracking_code: String,
    pub pickup_location: String,
    pub delivery_location: String,
    pub price: Decimal,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PricePackage> for PricePackageResponse {
    fn from(offer: PricePackage) -> Self {
        PricePackageResponse {
            id: offer.id.to_string(),
            tracking_code: offer.tracking_code,
            pickup_location: offer.pickup_location,
            delivery_location: offer.delivery_location,
            price: offer.price,
            created_at: offer.created_at,
            updated_at: offer.updated_at,
        }
    }
}

// ── POST /price-packages ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePricePackageRequest {
    pub pickup_location: String,
    pub delivery_location: String,
    pub price: Decimal,
}

pub async fn create_price_package(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreatePricePackageRequest>,
) -> Result<(StatusCode, Json<PricePackageResponse>), ApiServiceError> {
    let uc = CreatePricePackageUseCase {
        logistics: state.logistic_repo(),
        offers: state.price_package_repo(),
    };
    let offer = uc
        .execute(
            identity.user_id,
            CreatePricePackageInput {
                pickup_location: body.pickup_location,
                delivery_location: body.delivery_location,
                price: body.price,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(offer.into())))
}

// ── PATCH /price-packages/{tracking_code} ────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePricePackageRequest {
    pub pickup_location: Option<String>,
    pub delivery_location: Option<String>,
    pub price: Option<Decimal>,
}

pub async fn update_price_package(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    Json(body): Json<UpdatePricePackageRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let uc = UpdatePricePackageUseCase {
        logistics: state.logistic_repo(),
        offers: state.price_package_repo(),
    };
    uc.execute(
        identity.user_id,
        &tracking_code,
        UpdatePricePackageInput {
            pickup_location: body.pickup_location,
            delivery_location: body.delivery_location,
            price: body.price,
        },
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /price-packages/{tracking_code} ───────────────────────────────────

pub async fn delete_price_package(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<StatusCode, ApiServiceError> {
    let uc = DeletePricePackageUseCase {
        logistics: state.logistic_repo(),
        offers: state.price_package_repo(),
    };
    uc.execute(identity.user_id, &tracking_code).await?;
    Ok(StatusCode::NO_CONTENT)
}
