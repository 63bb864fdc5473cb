use chrono::Utc;
use uuid::Uuid;

use shipway_domain::pagination::PageRequest;
use shipway_domain::tracking::{CodePrefix, generate_tracking_code};

use crate::domain::repository::{
    BankAccountRepository, OrderRepository, PaymentGateway, TransactionRepository, UserRepository,
};
use crate::domain::types::{Transaction, TransactionStatus};
use crate::error::ApiServiceError;

// ── CreateTransaction ────────────────────────────────────────────────────────

pub struct CreateTransactionInput {
    pub tracking_code: String,
    pub callback: Option<String>,
}

/// Open a gateway checkout session for an order.
///
/// The gateway is asked first and nothing is persisted unless it hands back
/// a payment page, so a refused session leaves no pending row behind. One
/// pending or settled transaction per order; a second attempt is rejected
/// until the first one resolves.
pub struct CreateTransactionUseCase<O, U, T, B, G>
where
    O: OrderRepository,
    U: UserRepository,
    T: TransactionRepository,
    B: BankAccountRepository,
    G: PaymentGateway,
{
    pub orders: O,
    pub users: U,
    pub transactions: T,
    pub bank_accounts: B,
    pub gateway: G,
    pub public_base_url: String,
}

impl<O, U, T, B, G> CreateTransactionUseCase<O, U, T, B, G>
where
    O: OrderRepository,
    U: UserRepository,
    T: TransactionRepository,
    B: BankAccountRepository,
    G: PaymentGateway,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CreateTransactionInput,
    ) -> Result<(String, Transaction), ApiServiceError> {
        let order = self
            .orders
            .find_for_owner(user_id, &input.tracking_code)
            .await?
            .ok_or(ApiServiceError::OrderNotFound)?;
        if self.transactions.find_by_order_id(order.id).await?.is_some() {
            return Err(ApiServiceError::PaymentInProgress);
        }
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;

        let reference = Uuid::new_v4().simple().to_string();
        let callback_url = format!("{}/callback", self.public_base_url.trim_end_matches('/'));
        let auth_url = match self
            .gateway
            .create_init_transaction(&user.email, order.price, &callback_url, &reference)
            .await
        {
            Some(url) => url,
            None => return Err(ApiServiceError::PaymentSessionFailed),
        };

        let payout_account = self.bank_accounts.find_for_order(order.id).await?;
        let transaction = Transaction {
            id: Uuid::now_v7(),
            tracking_code: generate_tracking_code(CodePrefix::Transaction),
            reference,
            order_id: order.id,
            bank_account_id: payout_account.map(|account| account.user_id),
            amount: order.price,
            status: TransactionStatus::Pending,
            paid_at: None,
            redirect_url: input.callback,
            created_at: Utc::now(),
        };
        self.transactions.create(&transaction).await?;
        Ok((auth_url, transaction))
    }
}

// ── Callback ─────────────────────────────────────────────────────────────────

pub struct CallbackInput {
    pub tx_ref: String,
    pub transaction_id: Option<String>,
}

pub struct CallbackResult {
    pub redirect_url: Option<String>,
    pub tracking_code: String,
    pub status: &'static str,
    pub message: &'static str,
}

/// Settle a transaction from the gateway's browser redirect.
///
/// The redirect parameters are untrusted; the charge is re-confirmed with
/// the gateway before the row moves out of pending. An unverifiable
/// callback leaves the row untouched so a later retry can still settle it.
pub struct CallbackUseCase<T: TransactionRepository, G: PaymentGateway> {
    pub transactions: T,
    pub gateway: G,
}

impl<T: TransactionRepository, G: PaymentGateway> CallbackUseCase<T, G> {
    pub async fn execute(&self, input: CallbackInput) -> Result<CallbackResult, ApiServiceError> {
        let transaction = self
            .transactions
            .find_by_reference(&input.tx_ref)
            .await?
            .ok_or(ApiServiceError::TransactionNotFound)?;

        let outcome = match &input.transaction_id {
            Some(id) => self.gateway.verify_transaction(id, transaction.amount).await,
            None => None,
        };
        let (status, message) = match outcome {
            Some(true) => {
                self.transactions
                    .mark_success(&transaction, Utc::now())
                    .await?;
                ("success", "Payment successful")
            }
            Some(false) => {
                self.transactions.mark_failed(transaction.id).await?;
                ("failed", "Transaction failed")
            }
            None => ("error", "Unable to verify transaction"),
        };
        Ok(CallbackResult {
            redirect_url: transaction.redirect_url,
            tracking_code: transaction.tracking_code,
            status,
            message,
        })
    }
}

// ── ListPayments ─────────────────────────────────────────────────────────────

/// Incoming payments against the caller's payout account, optionally
/// filtered by settlement status.
pub struct ListPaymentsUseCase<B: BankAccountRepository, T: TransactionRepository> {
    pub bank_accounts: B,
    pub transactions: T,
}

impl<B: BankAccountRepository, T: TransactionRepository> ListPaymentsUseCase<B, T> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        status: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Transaction>, ApiServiceError> {
        let account = self
            .bank_accounts
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::BankAccountNotFound)?;
        let status = match status {
            Some(raw) => Some(
                TransactionStatus::from_kebab_case(raw)
                    .ok_or(ApiServiceError::InvalidStatusFilter)?,
            ),
            None => None,
        };
        self.transactions
            .list_for_bank_account(account.user_id, status, page)
            .await
    }
}

// ── GetPayment ───────────────────────────────────────────────────────────────

pub struct GetPaymentUseCase<B: BankAccountRepository, T: TransactionRepository> {
    pub bank_accounts: B,
    pub transactions: T,
}

impl<B: BankAccountRepository, T: TransactionRepository> GetPaymentUseCase<B, T> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        tracking_code: &str,
    ) -> Result<Transaction, ApiServiceError> {
        let account = self
            .bank_accounts
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::BankAccountNotFound)?;
        self.transactions
            .find_for_bank_account(account.user_id, tracking_code)
            .await?
            .ok_or(ApiServiceError::TransactionNotFound)
    }
}
