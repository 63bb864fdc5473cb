use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shipway_auth_types::identity::IdentityHeaders;
use shipway_auth_types::scope::PackageScope;

use crate::domain::types::{CargoType, Package};
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::package::{
    CreatePackageInput, CreatePackageUseCase, GetPackageForOrderUseCase, GetPackageUseCase,
    GetPackageWithOffersUseCase, ListPackagesUseCase, SearchPackagesUseCase, TrackPackageUseCase,
    UpdatePackageForOrderUseCase, UpdatePackageInput, UpdatePackageUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PackageResponse {
    pub id: String,
    pub tracking_code: String,
    pub cargo_name: String,
    pub cargo_type: &'static str,
    pub weight: Decimal,
    pub quantity: i32,
    pub pickup_location: String,
    pub delivery_location: String,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Package> for PackageResponse {
    fn from(package: Package) -> Self {
        PackageResponse {
            id: package.id.to_string(),
            tracking_code: package.tracking_code,
            cargo_name: package.cargo_name,
            cargo_type: package.cargo_type.as_kebab_case(),
            weight: package.weight,
            quantity: package.quantity,
            pickup_location: package.pickup_location,
            delivery_location: package.delivery_location,
            created_at: package.created_at,
            updated_at: package.updated_at,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PackageListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    #[serde(rename = "tracking_code")]
    pub tracking_code: Option<String>,
}

fn page_from(query: &PackageListQuery) -> shipway_domain::pagination::PageRequest {
    shipway_domain::pagination::PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    }
}

// ── GET /packages ────────────────────────────────────────────────────────────

pub async fn list_packages(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<PackageListQuery>,
) -> Result<Json<Vec<PackageResponse>>, ApiServiceError> {
    let uc = ListPackagesUseCase {
        repo: state.package_repo(),
    };
    let packages = uc
        .execute(PackageScope::Owner(identity.user_id), page_from(&query))
        .await?;
    Ok(Json(
        packages.into_iter().map(PackageResponse::from).collect(),
    ))
}

// ── GET /packages/search/by-tracking-code ────────────────────────────────────

pub async fn search_packages(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<PackageListQuery>,
) -> Result<Json<Vec<PackageResponse>>, ApiServiceError> {
    let needle = match query.tracking_code.as_deref() {
        Some(needle) => needle.to_owned(),
        None => return Err(ApiServiceError::MissingData),
    };
    let uc = SearchPackagesUseCase {
        repo: state.package_repo(),
    };
    let packages = uc
        .execute(
            PackageScope::Owner(identity.user_id),
            &needle,
            page_from(&query),
        )
        .await?;
    Ok(Json(
        packages.into_iter().map(PackageResponse::from).collect(),
    ))
}

// ── POST /packages/create ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePackageRequest {
    pub cargo_name: String,
    pub cargo_type: String,
    pub weight: Decimal,
    pub quantity: i32,
    pub pickup_location: String,
    pub delivery_location: String,
}

#[derive(Serialize)]
pub struct CreatePackageResponse {
    #[serde(flatten)]
    pub package: PackageResponse,
    pub candidates: usize,
}

pub async fn create_package(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreatePackageRequest>,
) -> Result<(StatusCode, Json<CreatePackageResponse>), ApiServiceError> {
    let uc = CreatePackageUseCase {
        packages: state.package_repo(),
        offers: state.price_package_repo(),
    };
    let (package, candidates) = uc
        .execute(
            identity.user_id,
            CreatePackageInput {
                cargo_name: body.cargo_name,
                cargo_type: body.cargo_type,
                weight: body.weight,
                quantity: body.quantity,
                pickup_location: body.pickup_location,
                delivery_location: body.delivery_location,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatePackageResponse {
            package: package.into(),
            candidates,
        }),
    ))
}

// ── GET /packages/cargo-types ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CargoTypeChoice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct CargoTypesResponse {
    pub choices: Vec<CargoTypeChoice>,
}

pub async fn cargo_types(_identity: IdentityHeaders) -> Json<CargoTypesResponse> {
    let choices = CargoType::ALL
        .iter()
        .map(|cargo_type| CargoTypeChoice {
            value: cargo_type.as_kebab_case(),
            label: cargo_type.label(),
        })
        .collect();
    Json(CargoTypesResponse { choices })
}

// ── GET /packages/get-price-packages/{tracking_code} ─────────────────────────

#[derive(Serialize)]
pub struct OfferQuoteResponse {
    pub tracking_code: String,
    pub pickup_location: String,
    pub delivery_location: String,
    pub price: Decimal,
    pub shipping_price: Decimal,
}

#[derive(Serialize)]
pub struct PackageOffersResponse {
    #[serde(flatten)]
    pub package: PackageResponse,
    pub price_packages: Vec<OfferQuoteResponse>,
}

pub async fn get_package_offers(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<PackageOffersResponse>, ApiServiceError> {
    let uc = GetPackageWithOffersUseCase {
        repo: state.package_repo(),
    };
    let (package, quotes) = uc
        .execute(PackageScope::Owner(identity.user_id), &tracking_code)
        .await?;
    let price_packages = quotes
        .into_iter()
        .map(|quote| OfferQuoteResponse {
            tracking_code: quote.offer.tracking_code,
            pickup_location: quote.offer.pickup_location,
            delivery_location: quote.offer.delivery_location,
            price: quote.offer.price,
            shipping_price: quote.shipping_price,
        })
        .collect();
    Ok(Json(PackageOffersResponse {
        package: package.into(),
        price_packages,
    }))
}

// ── GET /packages/rud/{tracking_code} (by order code) ────────────────────────

pub async fn get_package_for_order(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<PackageResponse>, ApiServiceError> {
    let uc = GetPackageForOrderUseCase {
        orders: state.order_repo(),
        packages: state.package_repo(),
    };
    let package = uc.execute(identity.user_id, &tracking_code).await?;
    Ok(Json(package.into()))
}

// ── PATCH /packages/rud/{tracking_code} (by order code) ──────────────────────

#[derive(Deserialize)]
pub struct UpdatePackageRequest {
    pub cargo_name: Option<String>,
    pub cargo_type: Option<String>,
    pub weight: Option<Decimal>,
    pub quantity: Option<i32>,
    pub pickup_location: Option<String>,
    pub delivery_location: Option<String>,
}

impl From<UpdatePackageRequest> for UpdatePackageInput {
    fn from(body: UpdatePackageRequest) -> Self {
        UpdatePackageInput {
            cargo_name: body.cargo_name,
            cargo_type: body.cargo_type,
            weight: body.weight,
            quantity: body.quantity,
            pickup_location: body.pickup_location,
            delivery_location: body.delivery_location,
        }
    }
}

pub async fn update_package_for_order(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    Json(body): Json<UpdatePackageRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let uc = UpdatePackageForOrderUseCase {
        orders: state.order_repo(),
        packages: state.package_repo(),
    };
    uc.execute(identity.user_id, &tracking_code, body.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /packages/rud/pkg-code/{tracking_code} ───────────────────────────────

pub async fn get_package(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<PackageResponse>, ApiServiceError> {
    let uc = GetPackageUseCase {
        repo: state.package_repo(),
    };
    let package = uc
        .execute(PackageScope::Owner(identity.user_id), &tracking_code)
        .await?;
    Ok(Json(package.into()))
}

// ── PATCH /packages/rud/pkg-code/{tracking_code} ─────────────────────────────

pub async fn update_package(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    Json(body): Json<UpdatePackageRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let uc = UpdatePackageUseCase {
        repo: state.package_repo(),
    };
    uc.execute(
        PackageScope::Owner(identity.user_id),
        &tracking_code,
        body.into(),
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /packages/rud/any/pkg-code/{tracking_code} (admin) ───────────────────

fn require_admin(identity: &IdentityHeaders) -> Result<(), ApiServiceError> {
    if !identity.role.is_admin() {
        return Err(ApiServiceError::Forbidden);
    }
    Ok(())
}

pub async fn get_package_any(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<PackageResponse>, ApiServiceError> {
    require_admin(&identity)?;
    let uc = GetPackageUseCase {
        repo: state.package_repo(),
    };
    let package = uc.execute(PackageScope::Any, &tracking_code).await?;
    Ok(Json(package.into()))
}

// ── PATCH /packages/rud/any/pkg-code/{tracking_code} (admin) ─────────────────

pub async fn update_package_any(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    Json(body): Json<UpdatePackageRequest>,
) -> Result<StatusCode, ApiServiceError> {
    require_admin(&identity)?;
    let uc = UpdatePackageUseCase {
        repo: state.package_repo(),
    };
    uc.execute(PackageScope::Any, &tracking_code, body.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /packages/track/{tracking_code} (logistic) ───────────────────────────

pub async fn track_package(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<PackageResponse>, ApiServiceError> {
    let uc = TrackPackageUseCase {
        logistics: state.logistic_repo(),
        packages: state.package_repo(),
        orders: state.order_repo(),
        offers: state.price_package_repo(),
    };
    let package = uc.execute(identity.user_id, &tracking_code).await?;
    Ok(Json(package.into()))
}
