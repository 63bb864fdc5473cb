use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shipway_auth_types::api_key::ApiKeyHeader;
use shipway_auth_types::identity::IdentityHeaders;
use shipway_domain::pagination::PageRequest;

use crate::domain::types::{Profile, User};
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::account::{
    GetMeUseCase, GetUserUseCase, ListUsersUseCase, LoginCheckUseCase, MarkEmailVerifiedUseCase,
    RegisterUserInput, RegisterUserUseCase, UpdateMyProfileInput, UpdateMyProfileUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub active: bool,
    pub staff: bool,
    pub admin: bool,
    pub verified_email: bool,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.to_string(),
            email: user.email,
            active: user.active,
            staff: user.staff,
            admin: user.admin,
            verified_email: user.verified_email,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub verified_email: bool,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub about: String,
    pub account_type: Option<&'static str>,
    pub approved: bool,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl MeResponse {
    fn from_parts(user: User, profile: Profile) -> Self {
        MeResponse {
            id: user.id.to_string(),
            email: user.email,
            verified_email: user.verified_email,
            username: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone: profile.phone,
            address: profile.address,
            city: profile.city,
            state: profile.state,
            zip: profile.zip,
            about: profile.about,
            account_type: profile.account_type.map(|t| t.as_kebab_case()),
            approved: profile.approved,
            created_at: user.created_at,
        }
    }
}

fn check_api_key(header: &ApiKeyHeader, state: &AppState) -> Result<(), ApiServiceError> {
    if header.api_key != state.api_key {
        return Err(ApiServiceError::Unauthorized);
    }
    Ok(())
}

// ── POST /accounts/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub account_type: Option<String>,
}

pub async fn register(
    api_key: ApiKeyHeader,
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiServiceError> {
    check_api_key(&api_key, &state)?;
    let uc = RegisterUserUseCase {
        repo: state.user_repo(),
    };
    let user = uc
        .execute(RegisterUserInput {
            email: body.email,
            account_type: body.account_type,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /accounts/login/check ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginCheckRequest {
    pub email: String,
}

pub async fn login_check(
    api_key: ApiKeyHeader,
    State(state): State<AppState>,
    Json(body): Json<LoginCheckRequest>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    check_api_key(&api_key, &state)?;
    let uc = LoginCheckUseCase {
        repo: state.user_repo(),
    };
    let user = uc.execute(&body.email).await?;
    Ok(Json(user.into()))
}

// ── POST /accounts/users/{user_id}/mark-verified ─────────────────────────────

pub async fn mark_verified(
    api_key: ApiKeyHeader,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiServiceError> {
    check_api_key(&api_key, &state)?;
    let uc = MarkEmailVerifiedUseCase {
        repo: state.user_repo(),
    };
    uc.execute(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /accounts/users ──────────────────────────────────────────────────────

pub async fn list_users(
    api_key: ApiKeyHeader,
    State(state): State<AppState>,
    axum::extract::Query(page): axum::extract::Query<PageRequest>,
) -> Result<Json<Vec<UserResponse>>, ApiServiceError> {
    check_api_key(&api_key, &state)?;
    let uc = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = uc.execute(page).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /accounts/users/{user_id} ────────────────────────────────────────────

pub async fn get_user(
    api_key: ApiKeyHeader,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    check_api_key(&api_key, &state)?;
    let uc = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = uc.execute(user_id).await?;
    Ok(Json(user.into()))
}

// ── GET /accounts/me ─────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<MeResponse>, ApiServiceError> {
    let uc = GetMeUseCase {
        repo: state.user_repo(),
    };
    let (user, profile) = uc.execute(identity.user_id).await?;
    Ok(Json(MeResponse::from_parts(user, profile)))
}

// ── PATCH /accounts/me ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub about: Option<String>,
    pub account_type: Option<String>,
}

pub async fn update_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let uc = UpdateMyProfileUseCase {
        repo: state.user_repo(),
    };
    uc.execute(
        identity.user_id,
        UpdateMyProfileInput {
            first_name: body.first_name,
            last_name: body.last_name,
            phone: body.phone,
            address: body.address,
            city: body.city,
            state: body.state,
            zip: body.zip,
            about: body.about,
            account_type: body.account_type,
        },
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
