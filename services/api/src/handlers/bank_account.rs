use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use shipway_auth_types::identity::IdentityHeaders;

use crate::domain::types::{BankAccount, UserAuthorization};
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::bank_account::{
    GetBankAccountUseCase, ListAuthorizationsUseCase, UpsertBankAccountInput,
    UpsertBankAccountUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct BankAccountResponse {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<BankAccount> for BankAccountResponse {
    fn from(account: BankAccount) -> Self {
        BankAccountResponse {
            bank_name: account.bank_name,
            account_number: account.account_number,
            account_name: account.account_name,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Saved payment method. The gateway token itself stays server-side.
#[derive(Serialize)]
pub struct AuthorizationResponse {
    pub id: String,
    pub account_name: String,
    pub card_type: String,
    pub last4: String,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserAuthorization> for AuthorizationResponse {
    fn from(authorization: UserAuthorization) -> Self {
        AuthorizationResponse {
            id: authorization.id.to_string(),
            account_name: authorization.account_name,
            card_type: authorization.card_type,
            last4: authorization.last4,
            created_at: authorization.created_at,
        }
    }
}

// ── GET /bank-account ────────────────────────────────────────────────────────

pub async fn get_bank_account(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<BankAccountResponse>, ApiServiceError> {
    let uc = GetBankAccountUseCase {
        repo: state.bank_account_repo(),
    };
    let account = uc.execute(identity.user_id).await?;
    Ok(Json(account.into()))
}

// ── PATCH /bank-account ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpsertBankAccountRequest {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
}

pub async fn upsert_bank_account(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<UpsertBankAccountRequest>,
) -> Result<Json<BankAccountResponse>, ApiServiceError> {
    let uc = UpsertBankAccountUseCase {
        repo: state.bank_account_repo(),
    };
    let account = uc
        .execute(
            identity.user_id,
            UpsertBankAccountInput {
                bank_name: body.bank_name,
                account_number: body.account_number,
                account_name: body.account_name,
            },
        )
        .await?;
    Ok(Json(account.into()))
}

// ── GET /authorizations ──────────────────────────────────────────────────────

pub async fn list_authorizations(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorizationResponse>>, ApiServiceError> {
    let uc = ListAuthorizationsUseCase {
        repo: state.authorization_repo(),
    };
    let authorizations = uc.execute(identity.user_id).await?;
    Ok(Json(
        authorizations
            .into_iter()
            .map(AuthorizationResponse::from)
            .collect(),
    ))
}
