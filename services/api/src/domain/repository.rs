#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use shipway_auth_types::scope::PackageScope;
use shipway_domain::pagination::PageRequest;

use crate::domain::types::{
    BankAccount, Driver, DriverContact, DriverPatch, Logistic, LogisticPatch, Order, Package,
    PackagePatch, PricePackage, PricePackagePatch, Profile, ProfilePatch, Transaction,
    TransactionStatus, User, UserAuthorization,
};
use crate::error::ApiServiceError;

/// Repository for accounts and their profiles.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiServiceError>;

    /// Insert the account and its profile in one transaction.
    async fn create_with_profile(
        &self,
        user: &User,
        profile: &Profile,
    ) -> Result<(), ApiServiceError>;

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<Profile>, ApiServiceError>;

    /// Apply a profile patch. Returns `true` if the profile exists.
    async fn update_profile(
        &self,
        user_id: Uuid,
        patch: &ProfilePatch,
    ) -> Result<bool, ApiServiceError>;

    /// Flag the account email as verified. Returns `true` if the account exists.
    async fn mark_email_verified(&self, user_id: Uuid) -> Result<bool, ApiServiceError>;
}

/// Repository for packages and their candidate route offers.
pub trait PackageRepository: Send + Sync {
    async fn list(
        &self,
        scope: PackageScope,
        page: PageRequest,
    ) -> Result<Vec<Package>, ApiServiceError>;

    /// Case-insensitive substring search over tracking codes.
    async fn search_by_tracking_code(
        &self,
        scope: PackageScope,
        tracking_code: &str,
        page: PageRequest,
    ) -> Result<Vec<Package>, ApiServiceError>;

    async fn find_by_tracking_code(
        &self,
        scope: PackageScope,
        tracking_code: &str,
    ) -> Result<Option<Package>, ApiServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Package>, ApiServiceError>;

    /// Insert the package and link its candidate route offers in one transaction.
    async fn create_with_candidates(
        &self,
        package: &Package,
        price_package_ids: &[Uuid],
    ) -> Result<(), ApiServiceError>;

    /// Apply a package patch. Returns `true` if a package matched the scope.
    async fn update(
        &self,
        scope: PackageScope,
        tracking_code: &str,
        patch: &PackagePatch,
    ) -> Result<bool, ApiServiceError>;

    /// Route offers captured as candidates when the package was created.
    async fn candidates(&self, package_id: Uuid) -> Result<Vec<PricePackage>, ApiServiceError>;
}

/// Repository for route offers published by logistics companies.
pub trait PricePackageRepository: Send + Sync {
    /// Offers whose pickup and delivery locations match, case-insensitively.
    async fn find_matching_route(
        &self,
        pickup_location: &str,
        delivery_location: &str,
    ) -> Result<Vec<PricePackage>, ApiServiceError>;

    async fn find_by_tracking_code(
        &self,
        tracking_code: &str,
    ) -> Result<Option<PricePackage>, ApiServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PricePackage>, ApiServiceError>;

    async fn create(&self, price_package: &PricePackage) -> Result<(), ApiServiceError>;

    /// Apply an offer patch. Returns `true` if the offer belongs to the company.
    async fn update(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
        patch: &PricePackagePatch,
    ) -> Result<bool, ApiServiceError>;

    /// Delete an offer. Returns `true` if the offer belonged to the company.
    async fn delete(&self, logistic_id: Uuid, tracking_code: &str)
        -> Result<bool, ApiServiceError>;
}

/// Repository for orders.
pub trait OrderRepository: Send + Sync {
    async fn list_for_owner(
        &self,
        owner_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError>;

    async fn find_for_owner(
        &self,
        owner_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<Order>, ApiServiceError>;

    async fn find_by_package_id(&self, package_id: Uuid) -> Result<Option<Order>, ApiServiceError>;

    /// Order whose route offer belongs to the given company.
    async fn find_for_logistic(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<Order>, ApiServiceError>;

    async fn has_transaction(&self, order_id: Uuid) -> Result<bool, ApiServiceError>;

    /// Drop any existing order for the package and insert the new one in
    /// one transaction.
    async fn replace_for_package(&self, order: &Order) -> Result<(), ApiServiceError>;

    /// Delete an order. Returns `true` if the order belonged to the owner.
    async fn delete_for_owner(
        &self,
        owner_id: Uuid,
        tracking_code: &str,
    ) -> Result<bool, ApiServiceError>;

    async fn list_recent_for_logistic(
        &self,
        logistic_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError>;

    async fn list_for_price_package(
        &self,
        price_package_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError>;

    async fn assign_driver(&self, order_id: Uuid, driver_id: Uuid)
        -> Result<(), ApiServiceError>;
}

/// Repository for drivers enrolled with a logistics company.
pub trait DriverRepository: Send + Sync {
    async fn list_for_logistic(
        &self,
        logistic_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<DriverContact>, ApiServiceError>;

    /// All drivers of the company with their contact details, unpaginated.
    async fn contacts_for_logistic(
        &self,
        logistic_id: Uuid,
    ) -> Result<Vec<DriverContact>, ApiServiceError>;

    async fn find_for_logistic(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<DriverContact>, ApiServiceError>;

    async fn create(&self, driver: &Driver) -> Result<(), ApiServiceError>;

    /// Apply a driver patch. Returns `true` if the driver belongs to the company.
    async fn update(
        &self,
        logistic_id: Uuid,
        tracking_code: &str,
        patch: &DriverPatch,
    ) -> Result<bool, ApiServiceError>;

    /// Delete a driver. Returns `true` if the driver belonged to the company.
    async fn delete(&self, logistic_id: Uuid, tracking_code: &str)
        -> Result<bool, ApiServiceError>;
}

/// Repository for payment transactions.
pub trait TransactionRepository: Send + Sync {
    async fn create(&self, transaction: &Transaction) -> Result<(), ApiServiceError>;

    async fn find_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<Transaction>, ApiServiceError>;

    async fn find_by_order_id(
        &self,
        order_id: Uuid,
    ) -> Result<Option<Transaction>, ApiServiceError>;

    /// Mark the transaction paid and enqueue the receipt event in one
    /// transaction.
    async fn mark_success(
        &self,
        transaction: &Transaction,
        paid_at: DateTime<Utc>,
    ) -> Result<(), ApiServiceError>;

    async fn mark_failed(&self, transaction_id: Uuid) -> Result<(), ApiServiceError>;

    async fn list_for_bank_account(
        &self,
        bank_account_id: Uuid,
        status: Option<TransactionStatus>,
        page: PageRequest,
    ) -> Result<Vec<Transaction>, ApiServiceError>;

    async fn find_for_bank_account(
        &self,
        bank_account_id: Uuid,
        tracking_code: &str,
    ) -> Result<Option<Transaction>, ApiServiceError>;
}

/// Repository for partner payout accounts.
pub trait BankAccountRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid)
        -> Result<Option<BankAccount>, ApiServiceError>;

    async fn upsert(&self, account: &BankAccount) -> Result<(), ApiServiceError>;

    /// Payout account of the company whose route offer the order selected.
    async fn find_for_order(&self, order_id: Uuid)
        -> Result<Option<BankAccount>, ApiServiceError>;
}

/// Repository for saved payment-method tokens.
pub trait AuthorizationRepository: Send + Sync {
    async fn list_for_user(&self, user_id: Uuid)
        -> Result<Vec<UserAuthorization>, ApiServiceError>;
}

/// Repository for logistics companies.
pub trait LogisticRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Logistic>, ApiServiceError>;

    /// Apply a company patch. Returns `true` if the account owns a company.
    async fn update(&self, user_id: Uuid, patch: &LogisticPatch)
        -> Result<bool, ApiServiceError>;
}

/// Port for the hosted payment gateway.
pub trait PaymentGateway: Send + Sync {
    /// Open a checkout session. Returns the hosted payment page URL, or
    /// `None` if the gateway refused or was unreachable.
    async fn create_init_transaction(
        &self,
        email: &str,
        amount: Decimal,
        callback_url: &str,
        reference: &str,
    ) -> Option<String>;

    /// Confirm a charge with the gateway. `Some(true)` means paid with a
    /// matching amount, `Some(false)` means declined, `None` means the
    /// outcome could not be established.
    async fn verify_transaction(&self, transaction_id: &str, amount: Decimal) -> Option<bool>;
}
