use uuid::Uuid;

use crate::domain::repository::LogisticRepository;
use crate::domain::types::LogisticPatch;
use crate::error::ApiServiceError;

pub struct UpdateLogisticInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
}

/// Update the caller's logistics company record. Companies are provisioned
/// when the account is approved, so a missing row is a not-found, not a
/// create.
pub struct UpdateLogisticUseCase<L: LogisticRepository> {
    pub repo: L,
}

impl<L: LogisticRepository> UpdateLogisticUseCase<L> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateLogisticInput,
    ) -> Result<(), ApiServiceError> {
        let patch = LogisticPatch {
            name: input.name,
            address: input.address,
            about: input.about,
        };
        if patch.is_empty() {
            return Err(ApiServiceError::MissingData);
        }
        let updated = self.repo.update(user_id, &patch).await?;
        if !updated {
            return Err(ApiServiceError::LogisticNotFound);
        }
        Ok(())
    }
}
