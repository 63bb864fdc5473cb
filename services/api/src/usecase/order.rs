use chrono::Utc;
use uuid::Uuid;

use shipway_auth_types::scope::PackageScope;
use shipway_domain::pagination::PageRequest;
use shipway_domain::tracking::{CodePrefix, generate_tracking_code};

use crate::domain::repository::{
    DriverRepository, LogisticRepository, OrderRepository, PackageRepository,
    PricePackageRepository,
};
use crate::domain::types::{Order, order_price};
use crate::error::ApiServiceError;

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderInput {
    pub package_code: String,
    pub price_code: String,
}

/// Select a route offer for a package, replacing any previous selection.
///
/// Replacement is only allowed while the package is unpaid: once a
/// transaction hangs off the live order, re-selection is rejected and the
/// existing rows stay untouched. The delete-and-insert runs in one database
/// transaction and the unique order-per-package constraint serializes
/// concurrent selections.
pub struct CreateOrderUseCase<P: PackageRepository, O: OrderRepository> {
    pub packages: P,
    pub orders: O,
}

impl<P: PackageRepository, O: OrderRepository> CreateOrderUseCase<P, O> {
    pub async fn execute(&self, input: CreateOrderInput) -> Result<Order, ApiServiceError> {
        let package = self
            .packages
            .find_by_tracking_code(PackageScope::Any, &input.package_code)
            .await?
            .ok_or(ApiServiceError::PackageNotFound)?;

        let candidates = self.packages.candidates(package.id).await?;
        let offer = candidates
            .into_iter()
            .find(|offer| offer.tracking_code == input.price_code)
            .ok_or(ApiServiceError::PricePackageNotFound)?;

        if let Some(existing) = self.orders.find_by_package_id(package.id).await? {
            if self.orders.has_transaction(existing.id).await? {
                return Err(ApiServiceError::PaymentInProgress);
            }
        }

        let order = Order {
            id: Uuid::now_v7(),
            tracking_code: generate_tracking_code(CodePrefix::Order),
            package_id: package.id,
            price_package_id: offer.id,
            driver_id: None,
            price: order_price(offer.price, package.weight, package.quantity),
            created_at: Utc::now(),
        };
        self.orders.replace_for_package(&order).await?;
        Ok(order)
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<O: OrderRepository> {
    pub repo: O,
}

impl<O: OrderRepository> ListOrdersUseCase<O> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        self.repo.list_for_owner(user_id, page).await
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<O: OrderRepository> {
    pub repo: O,
}

impl<O: OrderRepository> GetOrderUseCase<O> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        tracking_code: &str,
    ) -> Result<Order, ApiServiceError> {
        self.repo
            .find_for_owner(user_id, tracking_code)
            .await?
            .ok_or(ApiServiceError::OrderNotFound)
    }
}

// ── DeleteOrder ──────────────────────────────────────────────────────────────

pub struct DeleteOrderUseCase<O: OrderRepository> {
    pub repo: O,
}

impl<O: OrderRepository> DeleteOrderUseCase<O> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        tracking_code: &str,
    ) -> Result<(), ApiServiceError> {
        let deleted = self.repo.delete_for_owner(user_id, tracking_code).await?;
        if !deleted {
            return Err(ApiServiceError::OrderNotFound);
        }
        Ok(())
    }
}

// ── ListRecentOrders ─────────────────────────────────────────────────────────

/// Orders recently placed against the caller-logistic's offers.
pub struct ListRecentOrdersUseCase<L: LogisticRepository, O: OrderRepository> {
    pub logistics: L,
    pub orders: O,
}

impl<L: LogisticRepository, O: OrderRepository> ListRecentOrdersUseCase<L, O> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        self.orders
            .list_recent_for_logistic(logistic.id, page)
            .await
    }
}

// ── ListOrdersForOffer ───────────────────────────────────────────────────────

pub struct ListOrdersForOfferUseCase<
    L: LogisticRepository,
    PP: PricePackageRepository,
    O: OrderRepository,
> {
    pub logistics: L,
    pub offers: PP,
    pub orders: O,
}

impl<L, PP, O> ListOrdersForOfferUseCase<L, PP, O>
where
    L: LogisticRepository,
    PP: PricePackageRepository,
    O: OrderRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        offer_code: &str,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        let offer = self
            .offers
            .find_by_tracking_code(offer_code)
            .await?
            .ok_or(ApiServiceError::PricePackageNotFound)?;
        if offer.logistic_id != logistic.id {
            return Err(ApiServiceError::PricePackageNotFound);
        }
        self.orders.list_for_price_package(offer.id, page).await
    }
}

// ── AssignDriver ─────────────────────────────────────────────────────────────

pub struct AssignDriverInput {
    pub driver_code: String,
    pub order_code: String,
}

/// Put a verified, active driver of the caller's company on an order placed
/// against one of the company's offers.
pub struct AssignDriverUseCase<L: LogisticRepository, D: DriverRepository, O: OrderRepository> {
    pub logistics: L,
    pub drivers: D,
    pub orders: O,
}

impl<L, D, O> AssignDriverUseCase<L, D, O>
where
    L: LogisticRepository,
    D: DriverRepository,
    O: OrderRepository,
{
    pub async fn execute(&self, user_id: Uuid, input: AssignDriverInput) -> Result<(), ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        let contact = self
            .drivers
            .find_for_logistic(logistic.id, &input.driver_code)
            .await?
            .ok_or(ApiServiceError::DriverNotFound)?;
        if !contact.driver.verified || !contact.driver.active {
            return Err(ApiServiceError::DriverNotFound);
        }
        let order = self
            .orders
            .find_for_logistic(logistic.id, &input.order_code)
            .await?
            .ok_or(ApiServiceError::OrderNotFound)?;
        self.orders.assign_driver(order.id, contact.driver.id).await
    }
}
