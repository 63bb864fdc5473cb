use chrono::Utc;
use uuid::Uuid;

use shipway_domain::pagination::PageRequest;
use shipway_domain::tracking::{CodePrefix, generate_tracking_code};

use crate::domain::repository::{DriverRepository, LogisticRepository, UserRepository};
use crate::domain::types::{Driver, DriverContact, DriverPatch};
use crate::error::ApiServiceError;

// ── ListDrivers ──────────────────────────────────────────────────────────────

pub struct ListDriversUseCase<L: LogisticRepository, D: DriverRepository> {
    pub logistics: L,
    pub drivers: D,
}

impl<L: LogisticRepository, D: DriverRepository> ListDriversUseCase<L, D> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<DriverContact>, ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        self.drivers.list_for_logistic(logistic.id, page).await
    }
}

// ── SearchDrivers ────────────────────────────────────────────────────────────

/// Case-insensitive substring match over driver contact email and phone.
pub struct SearchDriversUseCase<L: LogisticRepository, D: DriverRepository> {
    pub logistics: L,
    pub drivers: D,
}

impl<L: LogisticRepository, D: DriverRepository> SearchDriversUseCase<L, D> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        search: &str,
    ) -> Result<Vec<DriverContact>, ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        let needle = search.to_lowercase();
        let mut contacts = self.drivers.contacts_for_logistic(logistic.id).await?;
        contacts.retain(|contact| {
            contact.email.to_lowercase().contains(&needle)
                || contact.phone.to_lowercase().contains(&needle)
        });
        Ok(contacts)
    }
}

// ── ListVerifiedDrivers ──────────────────────────────────────────────────────

pub struct ListVerifiedDriversUseCase<L: LogisticRepository, D: DriverRepository> {
    pub logistics: L,
    pub drivers: D,
}

impl<L: LogisticRepository, D: DriverRepository> ListVerifiedDriversUseCase<L, D> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<DriverContact>, ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        let mut contacts = self.drivers.contacts_for_logistic(logistic.id).await?;
        contacts.retain(|contact| contact.driver.verified && contact.driver.active);
        Ok(contacts)
    }
}

// ── CreateDriver ─────────────────────────────────────────────────────────────

pub struct CreateDriverInput {
    pub email: String,
}

/// Enroll an existing platform user as a driver of the caller's company.
/// Drivers start unverified and must be flagged before assignment.
pub struct CreateDriverUseCase<L: LogisticRepository, U: UserRepository, D: DriverRepository> {
    pub logistics: L,
    pub users: U,
    pub drivers: D,
}

impl<L, U, D> CreateDriverUseCase<L, U, D>
where
    L: LogisticRepository,
    U: UserRepository,
    D: DriverRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CreateDriverInput,
    ) -> Result<DriverContact, ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        let user = self
            .users
            .find_by_email(input.email.trim())
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        let profile = self.users.find_profile(user.id).await?;

        let driver = Driver {
            id: Uuid::now_v7(),
            tracking_code: generate_tracking_code(CodePrefix::Driver),
            logistic_id: logistic.id,
            user_id: user.id,
            verified: false,
            active: true,
            created_at: Utc::now(),
        };
        self.drivers.create(&driver).await?;
        Ok(DriverContact {
            driver,
            email: user.email,
            phone: profile.map_or(String::new(), |profile| profile.phone),
        })
    }
}

// ── GetDriver ────────────────────────────────────────────────────────────────

pub struct GetDriverUseCase<L: LogisticRepository, D: DriverRepository> {
    pub logistics: L,
    pub drivers: D,
}

impl<L: LogisticRepository, D: DriverRepository> GetDriverUseCase<L, D> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        tracking_code: &str,
    ) -> Result<DriverContact, ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        self.drivers
            .find_for_logistic(logistic.id, tracking_code)
            .await?
            .ok_or(ApiServiceError::DriverNotFound)
    }
}

// ── UpdateDriver ─────────────────────────────────────────────────────────────

pub struct UpdateDriverInput {
    pub verified: Option<bool>,
    pub active: Option<bool>,
}

pub struct UpdateDriverUseCase<L: LogisticRepository, D: DriverRepository> {
    pub logistics: L,
    pub drivers: D,
}

impl<L: LogisticRepository, D: DriverRepository> UpdateDriverUseCase<L, D> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        tracking_code: &str,
        input: UpdateDriverInput,
    ) -> Result<(), ApiServiceError> {
        let logistic = self
            .logistics
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        let patch = DriverPatch {
            verified: input.verified,
            active: input.active,
        };
        if patch.is_empty() {
            return Err(ApiServiceError::MissingData);
        }
        let updated = self
            .drivers
            .update(logistic.id, tracking_code, &patch)
            .await?;
        if !updated {
            return Err(ApiServiceError::DriverNotFound);
        }
        Ok(())
    }
}

// ── DeleteDriver ─────────────────────────────────────────────────────────────

pub struct DeleteDriverUseCase<L: LogisticRepository, D: DriverRepository> {
    pub logistics: L,
    pub drivers: D,
}

impl<L: LogisticRepository, D: DriverRepository> DeleteDriverUseCase<L, D> {
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
        let deleted = self.drivers.delete(logistic.id, tracking_code).await?;
        if !deleted {
            return Err(ApiServiceError::DriverNotFound);
        }
        Ok(())
    }
}
