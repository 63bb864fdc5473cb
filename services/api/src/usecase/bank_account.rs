use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{AuthorizationRepository, BankAccountRepository};
use crate::domain::types::{BankAccount, UserAuthorization};
use crate::error::ApiServiceError;

// ── GetBankAccount ───────────────────────────────────────────────────────────

pub struct GetBankAccountUseCase<B: BankAccountRepository> {
    pub repo: B,
}

impl<B: BankAccountRepository> GetBankAccountUseCase<B> {
    pub async fn execute(&self, user_id: Uuid) -> Result<BankAccount, ApiServiceError> {
        self.repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::BankAccountNotFound)
    }
}

// ── UpsertBankAccount ────────────────────────────────────────────────────────

pub struct UpsertBankAccountInput {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
}

/// Save the caller's payout account. One account per user; a repeated save
/// overwrites the details and keeps the original creation time.
pub struct UpsertBankAccountUseCase<B: BankAccountRepository> {
    pub repo: B,
}

impl<B: BankAccountRepository> UpsertBankAccountUseCase<B> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpsertBankAccountInput,
    ) -> Result<BankAccount, ApiServiceError> {
        let bank_name = input.bank_name.trim().to_owned();
        let account_number = input.account_number.trim().to_owned();
        let account_name = input.account_name.trim().to_owned();
        if bank_name.is_empty() || account_number.is_empty() || account_name.is_empty() {
            return Err(ApiServiceError::MissingData);
        }

        let existing = self.repo.find_by_user_id(user_id).await?;
        let now = Utc::now();
        let account = BankAccount {
            user_id,
            bank_name,
            account_number,
            account_name,
            created_at: existing.map_or(now, |account| account.created_at),
            updated_at: now,
        };
        self.repo.upsert(&account).await?;
        Ok(account)
    }
}

// ── ListAuthorizations ───────────────────────────────────────────────────────

pub struct ListAuthorizationsUseCase<A: AuthorizationRepository> {
    pub repo: A,
}

impl<A: AuthorizationRepository> ListAuthorizationsUseCase<A> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<UserAuthorization>, ApiServiceError> {
        self.repo.list_for_user(user_id).await
    }
}
