use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use shipway_auth_types::scope::PackageScope;
use shipway_domain::pagination::PageRequest;
use shipway_domain::tracking::{CodePrefix, generate_tracking_code};

use crate::domain::repository::{
    LogisticRepository, OrderRepository, PackageRepository, PricePackageRepository,
};
use crate::domain::types::{CargoType, OfferQuote, Package, PackagePatch, order_price};
use crate::error::ApiServiceError;

// ── CreatePackage ────────────────────────────────────────────────────────────

pub struct CreatePackageInput {
    pub cargo_name: String,
    pub cargo_type: String,
    pub weight: Decimal,
    pub quantity: i32,
    pub pickup_location: String,
    pub delivery_location: String,
}

/// Declare a shipment and capture the route offers that can serve it.
///
/// The package is only persisted when at least one offer matches the
/// pickup/delivery pair; a routeless package would be dead weight.
pub struct CreatePackageUseCase<P: PackageRepository, PP: PricePackageRepository> {
    pub packages: P,
    pub offers: PP,
}

impl<P: PackageRepository, PP: PricePackageRepository> CreatePackageUseCase<P, PP> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CreatePackageInput,
    ) -> Result<(Package, usize), ApiServiceError> {
        if input.cargo_name.trim().is_empty()
            || input.pickup_location.trim().is_empty()
            || input.delivery_location.trim().is_empty()
            || input.weight <= Decimal::ZERO
            || input.quantity < 1
        {
            return Err(ApiServiceError::MissingData);
        }
        let cargo_type = CargoType::from_kebab_case(&input.cargo_type)
            .ok_or(ApiServiceError::InvalidCargoType)?;

        let matching = self
            .offers
            .find_matching_route(&input.pickup_location, &input.delivery_location)
            .await?;
        if matching.is_empty() {
            return Err(ApiServiceError::NoMatchingRoute);
        }

        let now = Utc::now();
        let package = Package {
            id: Uuid::now_v7(),
            tracking_code: generate_tracking_code(CodePrefix::Package),
            user_id,
            cargo_name: input.cargo_name,
            cargo_type,
            weight: input.weight,
            quantity: input.quantity,
            pickup_location: input.pickup_location,
            delivery_location: input.delivery_location,
            created_at: now,
            updated_at: now,
        };
        let candidate_ids: Vec<Uuid> = matching.iter().map(|offer| offer.id).collect();
        self.packages
            .create_with_candidates(&package, &candidate_ids)
            .await?;
        Ok((package, candidate_ids.len()))
    }
}

// ── ListPackages ─────────────────────────────────────────────────────────────

pub struct ListPackagesUseCase<P: PackageRepository> {
    pub repo: P,
}

impl<P: PackageRepository> ListPackagesUseCase<P> {
    pub async fn execute(
        &self,
        scope: PackageScope,
        page: PageRequest,
    ) -> Result<Vec<Package>, ApiServiceError> {
        self.repo.list(scope, page).await
    }
}

// ── SearchPackages ───────────────────────────────────────────────────────────

pub struct SearchPackagesUseCase<P: PackageRepository> {
    pub repo: P,
}

impl<P: PackageRepository> SearchPackagesUseCase<P> {
    pub async fn execute(
        &self,
        scope: PackageScope,
        tracking_code: &str,
        page: PageRequest,
    ) -> Result<Vec<Package>, ApiServiceError> {
        self.repo
            .search_by_tracking_code(scope, tracking_code, page)
            .await
    }
}

// ── GetPackage ───────────────────────────────────────────────────────────────

pub struct GetPackageUseCase<P: PackageRepository> {
    pub repo: P,
}

impl<P: PackageRepository> GetPackageUseCase<P> {
    pub async fn execute(
        &self,
        scope: PackageScope,
        tracking_code: &str,
    ) -> Result<Package, ApiServiceError> {
        self.repo
            .find_by_tracking_code(scope, tracking_code)
            .await?
            .ok_or(ApiServiceError::PackageNotFound)
    }
}

// ── GetPackageWithOffers ─────────────────────────────────────────────────────

/// The package plus its candidate offers, each quoted for this package's
/// weight and quantity so the shipper can compare totals.
pub struct GetPackageWithOffersUseCase<P: PackageRepository> {
    pub repo: P,
}

impl<P: PackageRepository> GetPackageWithOffersUseCase<P> {
    pub async fn execute(
        &self,
        scope: PackageScope,
        tracking_code: &str,
    ) -> Result<(Package, Vec<OfferQuote>), ApiServiceError> {
        let package = self
            .repo
            .find_by_tracking_code(scope, tracking_code)
            .await?
            .ok_or(ApiServiceError::PackageNotFound)?;
        let quotes = self
            .repo
            .candidates(package.id)
            .await?
            .into_iter()
            .map(|offer| OfferQuote {
                shipping_price: order_price(offer.price, package.weight, package.quantity),
                offer,
            })
            .collect();
        Ok((package, quotes))
    }
}

// ── UpdatePackage ────────────────────────────────────────────────────────────

pub struct UpdatePackageInput {
    pub cargo_name: Option<String>,
    pub cargo_type: Option<String>,
    pub weight: Option<Decimal>,
    pub quantity: Option<i32>,
    pub pickup_location: Option<String>,
    pub delivery_location: Option<String>,
}

impl UpdatePackageInput {
    fn into_patch(self) -> Result<PackagePatch, ApiServiceError> {
        let cargo_type = match self.cargo_type.as_deref() {
            Some(raw) => {
                Some(CargoType::from_kebab_case(raw).ok_or(ApiServiceError::InvalidCargoType)?)
            }
            None => None,
        };
        if let Some(weight) = self.weight {
            if weight <= Decimal::ZERO {
                return Err(ApiServiceError::MissingData);
            }
        }
        if let Some(quantity) = self.quantity {
            if quantity < 1 {
                return Err(ApiServiceError::MissingData);
            }
        }
        Ok(PackagePatch {
            cargo_name: self.cargo_name,
            cargo_type,
            weight: self.weight,
            quantity: self.quantity,
            pickup_location: self.pickup_location,
            delivery_location: self.delivery_location,
        })
    }
}

pub struct UpdatePackageUseCase<P: PackageRepository> {
    pub repo: P,
}

impl<P: PackageRepository> UpdatePackageUseCase<P> {
    pub async fn execute(
        &self,
        scope: PackageScope,
        tracking_code: &str,
        input: UpdatePackageInput,
    ) -> Result<(), ApiServiceError> {
        let patch = input.into_patch()?;
        if patch.is_empty() {
            return Err(ApiServiceError::MissingData);
        }
        let found = self.repo.update(scope, tracking_code, &patch).await?;
        if !found {
            return Err(ApiServiceError::PackageNotFound);
        }
        Ok(())
    }
}

// ── GetPackageForOrder ───────────────────────────────────────────────────────

/// Resolve a package through the owner's order tracking code.
pub struct GetPackageForOrderUseCase<O: OrderRepository, P: PackageRepository> {
    pub orders: O,
    pub packages: P,
}

impl<O: OrderRepository, P: PackageRepository> GetPackageForOrderUseCase<O, P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        order_code: &str,
    ) -> Result<Package, ApiServiceError> {
        let order = self
            .orders
            .find_for_owner(user_id, order_code)
            .await?
            .ok_or(ApiServiceError::OrderNotFound)?;
        self.packages
            .find_by_id(order.package_id)
            .await?
            .ok_or(ApiServiceError::PackageNotFound)
    }
}

// ── UpdatePackageForOrder ────────────────────────────────────────────────────

pub struct UpdatePackageForOrderUseCase<O: OrderRepository, P: PackageRepository> {
    pub orders: O,
    pub packages: P,
}

impl<O: OrderRepository, P: PackageRepository> UpdatePackageForOrderUseCase<O, P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        order_code: &str,
        input: UpdatePackageInput,
    ) -> Result<(), ApiServiceError> {
        let order = self
            .orders
            .find_for_owner(user_id, order_code)
            .await?
            .ok_or(ApiServiceError::OrderNotFound)?;
        let package = self
            .packages
            .find_by_id(order.package_id)
            .await?
            .ok_or(ApiServiceError::PackageNotFound)?;

        let patch = input.into_patch()?;
        if patch.is_empty() {
            return Err(ApiServiceError::MissingData);
        }
        let found = self
            .packages
            .update(
                PackageScope::Owner(user_id),
                &package.tracking_code,
                &patch,
            )
            .await?;
        if !found {
            return Err(ApiServiceError::PackageNotFound);
        }
        Ok(())
    }
}

// ── TrackPackage ─────────────────────────────────────────────────────────────

/// A logistics company looks up a package it is serving. The package is
/// visible only when its live order selected one of the company's offers.
pub struct TrackPackageUseCase<
    L: LogisticRepository,
    P: PackageRepository,
    O: OrderRepository,
    PP: PricePackageRepository,
> {
    pub logistics: L,
    pub packages: P,
    pub orders: O,
    pub offers: PP,
}

impl<L, P, O, PP> TrackPackageUseCase<L, P, O, PP>
where
    L: LogisticRepository,
    P: PackageRepository,
    O: OrderRepository,
    PP: PricePackageRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        tracking_code: &str,
    ) -> Result<Package, ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        let package = self
            .packages
            .find_by_tracking_code(PackageScope::Any, tracking_code)
            .await?
            .ok_or(ApiServiceError::PackageNotFound)?;
        let order = self
            .orders
            .find_by_package_id(package.id)
            .await?
            .ok_or(ApiServiceError::PackageNotFound)?;
        let offer = self
            .offers
            .find_by_id(order.price_package_id)
            .await?
            .ok_or(ApiServiceError::PackageNotFound)?;
        if offer.logistic_id != logistic.id {
            return Err(ApiServiceError::PackageNotFound);
        }
        Ok(package)
    }
}
