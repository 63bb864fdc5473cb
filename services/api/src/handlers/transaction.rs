use anyhow::Context as _;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shipway_auth_types::identity::IdentityHeaders;

use crate::domain::types::Transaction;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::transaction::{
    CallbackInput, CallbackUseCase, CreateTransactionInput, CreateTransactionUseCase,
    GetPaymentUseCase, ListPaymentsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct TransactionResponse {
    pub id: String,
    pub tracking_code: String,
    pub reference: String,
    pub order_id: String,
    pub amount: Decimal,
    pub status: &'static str,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms_opt")]
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub redirect_url: Option<String>,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        TransactionResponse {
            id: transaction.id.to_string(),
            tracking_code: transaction.tracking_code,
            reference: transaction.reference,
            order_id: transaction.order_id.to_string(),
            amount: transaction.amount,
            status: transaction.status.as_kebab_case(),
            paid_at: transaction.paid_at,
            redirect_url: transaction.redirect_url,
            created_at: transaction.created_at,
        }
    }
}

// ── POST /transactions/{tracking_code} ───────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTransactionRequest {
    pub callback: Option<String>,
}

#[derive(Serialize)]
pub struct CreateTransactionResponse {
    pub authorization_url: String,
    pub transaction: TransactionResponse,
}

pub async fn create_transaction(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    Json(body): Json<CreateTransactionRequest>,
) -> Result<Json<CreateTransactionResponse>, ApiServiceError> {
    let uc = CreateTransactionUseCase {
        orders: state.order_repo(),
        users: state.user_repo(),
        transactions: state.transaction_repo(),
        bank_accounts: state.bank_account_repo(),
        gateway: state.gateway(),
        public_base_url: state.public_base_url.clone(),
    };
    let (authorization_url, transaction) = uc
        .execute(
            identity.user_id,
            CreateTransactionInput {
                tracking_code,
                callback: body.callback,
            },
        )
        .await?;
    Ok(Json(CreateTransactionResponse {
        authorization_url,
        transaction: transaction.into(),
    }))
}

// ── GET /callback ────────────────────────────────────────────────────────────

/// Query parameters the gateway appends when it redirects the payer's
/// browser back to us. `status` is ignored; the charge is re-verified.
#[derive(Deserialize, Default)]
pub struct CallbackQuery {
    pub status: Option<String>,
    pub tx_ref: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Serialize)]
struct CallbackParams<'a> {
    message: &'a str,
    status: &'a str,
    tracking_code: &'a str,
}

pub async fn callback(
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<CallbackQuery>,
) -> Result<Response, ApiServiceError> {
    let tx_ref = match query.tx_ref {
        Some(tx_ref) => tx_ref,
        None => return Err(ApiServiceError::MissingData),
    };
    let uc = CallbackUseCase {
        transactions: state.transaction_repo(),
        gateway: state.gateway(),
    };
    let result = uc
        .execute(CallbackInput {
            tx_ref,
            transaction_id: query.transaction_id,
        })
        .await?;

    match result.redirect_url {
        Some(redirect_url) => {
            let params = CallbackParams {
                message: result.message,
                status: result.status,
                tracking_code: &result.tracking_code,
            };
            let query = serde_qs::to_string(&params).context("encode callback params")?;
            let url = if redirect_url.contains('?') {
                format!("{redirect_url}&{query}")
            } else {
                format!("{redirect_url}?{query}")
            };
            Ok(Redirect::to(&url).into_response())
        }
        None => Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "message": result.message,
                "status": result.status,
                "tracking_code": result.tracking_code,
            })),
        )
            .into_response()),
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PaymentListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

fn page_from(query: &PaymentListQuery) -> shipway_domain::pagination::PageRequest {
    shipway_domain::pagination::PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    }
}

// ── GET /payments ────────────────────────────────────────────────────────────

pub async fn list_payments(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<PaymentListQuery>,
) -> Result<Json<Vec<TransactionResponse>>, ApiServiceError> {
    let uc = ListPaymentsUseCase {
        bank_accounts: state.bank_account_repo(),
        transactions: state.transaction_repo(),
    };
    let transactions = uc
        .execute(identity.user_id, None, page_from(&query))
        .await?;
    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}

// ── GET /payments/status/{status} ────────────────────────────────────────────

pub async fn list_payments_by_status(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(status): Path<String>,
    axum::extract::Query(query): axum::extract::Query<PaymentListQuery>,
) -> Result<Json<Vec<TransactionResponse>>, ApiServiceError> {
    let uc = ListPaymentsUseCase {
        bank_accounts: state.bank_account_repo(),
        transactions: state.transaction_repo(),
    };
    let transactions = uc
        .execute(identity.user_id, Some(&status), page_from(&query))
        .await?;
    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}

// ── GET /payments/{tracking_code} ────────────────────────────────────────────

pub async fn get_payment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<TransactionResponse>, ApiServiceError> {
    let uc = GetPaymentUseCase {
        bank_accounts: state.bank_account_repo(),
        transactions: state.transaction_repo(),
    };
    let transaction = uc.execute(identity.user_id, &tracking_code).await?;
    Ok(Json(transaction.into()))
}
