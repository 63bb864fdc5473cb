use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use shipway_domain::tracking::{CodePrefix, generate_tracking_code};

use crate::domain::repository::{LogisticRepository, PricePackageRepository};
use crate::domain::types::{PricePackage, PricePackagePatch};
use crate::error::ApiServiceError;

// ── CreatePricePackage ───────────────────────────────────────────────────────

pub struct CreatePricePackageInput {
    pub pickup_location: String,
    pub delivery_location: String,
    pub price: Decimal,
}

pub struct CreatePricePackageUseCase<L: LogisticRepository, PP: PricePackageRepository> {
    pub logistics: L,
    pub offers: PP,
}

impl<L: LogisticRepository, PP: PricePackageRepository> CreatePricePackageUseCase<L, PP> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CreatePricePackageInput,
    ) -> Result<PricePackage, ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;

        let pickup_location = input.pickup_location.trim().to_owned();
        let delivery_location = input.delivery_location.trim().to_owned();
        if pickup_location.is_empty()
            || delivery_location.is_empty()
            || input.price <= Decimal::ZERO
        {
            return Err(ApiServiceError::MissingData);
        }

        let now = Utc::now();
        let offer = PricePackage {
            id: Uuid::now_v7(),
            tracking_code: generate_tracking_code(CodePrefix::Route),
            logistic_id: logistic.id,
            pickup_location,
            delivery_location,
            price: input.price,
            created_at: now,
            updated_at: now,
        };
        self.offers.create(&offer).await?;
        Ok(offer)
    }
}

// ── UpdatePricePackage ───────────────────────────────────────────────────────

pub struct UpdatePricePackageInput {
    pub pickup_location: Option<String>,
    pub delivery_location: Option<String>,
    pub price: Option<Decimal>,
}

pub struct UpdatePricePackageUseCase<L: LogisticRepository, PP: PricePackageRepository> {
    pub logistics: L,
    pub offers: PP,
}

impl<L: LogisticRepository, PP: PricePackageRepository> UpdatePricePackageUseCase<L, PP> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        tracking_code: &str,
        input: UpdatePricePackageInput,
    ) -> Result<(), ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;

        if let Some(price) = input.price {
            if price <= Decimal::ZERO {
                return Err(ApiServiceError::MissingData);
            }
        }
        let patch = PricePackagePatch {
            pickup_location: input.pickup_location,
            delivery_location: input.delivery_location,
            price: input.price,
        };
        if patch.is_empty() {
            return Err(ApiServiceError::MissingData);
        }

        let updated = self
            .offers
            .update(logistic.id, tracking_code, &patch)
            .await?;
        if !updated {
            return Err(ApiServiceError::PricePackageNotFound);
        }
        Ok(())
    }
}

// ── DeletePricePackage ───────────────────────────────────────────────────────

pub struct DeletePricePackageUseCase<L: LogisticRepository, PP: PricePackageRepository> {
    pub logistics: L,
    pub offers: PP,
}

impl<L: LogisticRepository, PP: PricePackageRepository> DeletePricePackageUseCase<L, PP> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        tracking_code: &str,
    ) -> Result<(), ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        let deleted = self.offers.delete(logistic.id, tracking_code).await?;
        if !deleted {
            return Err(ApiServiceError::PricePackageNotFound);
        }
        Ok(())
    }
}
