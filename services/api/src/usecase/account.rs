use chrono::Utc;
use uuid::Uuid;

use shipway_domain::pagination::PageRequest;

use crate::domain::repository::UserRepository;
use crate::domain::types::{
    AccountType, Profile, ProfilePatch, User, username_from_email, validate_email,
};
use crate::error::ApiServiceError;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub email: String,
    pub account_type: Option<String>,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, ApiServiceError> {
        if !validate_email(&input.email) {
            return Err(ApiServiceError::MissingData);
        }
        let account_type = match input.account_type.as_deref() {
            Some(raw) => Some(
                AccountType::from_kebab_case(raw).ok_or(ApiServiceError::MissingData)?,
            ),
            None => None,
        };
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ApiServiceError::EmailTaken);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            active: true,
            staff: false,
            admin: false,
            verified_email: false,
            created_at: now,
        };
        let profile = Profile {
            user_id: user.id,
            username: username_from_email(&user.email),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            about: String::new(),
            account_type,
            approved: false,
            created_at: now,
        };
        self.repo.create_with_profile(&user, &profile).await?;
        Ok(user)
    }
}

// ── LoginCheck ───────────────────────────────────────────────────────────────

/// Pre-issuance gate run by the identity edge before it mints a session.
pub struct LoginCheckUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LoginCheckUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<User, ApiServiceError> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        if !user.active {
            return Err(ApiServiceError::Unauthorized);
        }
        if !user.verified_email {
            return Err(ApiServiceError::UnverifiedEmail {
                email: user.email.clone(),
            });
        }
        Ok(user)
    }
}

// ── MarkEmailVerified ────────────────────────────────────────────────────────

pub struct MarkEmailVerifiedUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> MarkEmailVerifiedUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(), ApiServiceError> {
        let found = self.repo.mark_email_verified(user_id).await?;
        if !found {
            return Err(ApiServiceError::UserNotFound);
        }
        Ok(())
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<User>, ApiServiceError> {
        self.repo.list(page).await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}

// ── GetMe ────────────────────────────────────────────────────────────────────

pub struct GetMeUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetMeUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(User, Profile), ApiServiceError> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        let profile = self
            .repo
            .find_profile(user_id)
            .await?
            .ok_or(ApiServiceError::ProfileNotFound)?;
        Ok((user, profile))
    }
}

// ── UpdateMyProfile ──────────────────────────────────────────────────────────

pub struct UpdateMyProfileInput {
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

pub struct UpdateMyProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateMyProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateMyProfileInput,
    ) -> Result<(), ApiServiceError> {
        let account_type = match input.account_type.as_deref() {
            Some(raw) => Some(
                AccountType::from_kebab_case(raw).ok_or(ApiServiceError::MissingData)?,
            ),
            None => None,
        };
        let patch = ProfilePatch {
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            address: input.address,
            city: input.city,
            state: input.state,
            zip: input.zip,
            about: input.about,
            account_type,
        };
        if patch.is_empty() {
            return Err(ApiServiceError::MissingData);
        }
        let found = self.repo.update_profile(user_id, &patch).await?;
        if !found {
            return Err(ApiServiceError::ProfileNotFound);
        }
        Ok(())
    }
}
