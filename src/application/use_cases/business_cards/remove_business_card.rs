//! Remove Business Card Use Case
//!
//! Deletes a business card by identifier.

use std::sync::Arc;

use crate::domain::gateways::Repository;
use crate::domain::models::business_card::{BusinessCard, BusinessCardId};
use crate::domain::models::operation_result::OperationResult;
use crate::shared::errors::UseCaseError;

/// Use case for removing a business card
pub struct RemoveBusinessCardUseCase {
    repository: Arc<dyn Repository<BusinessCard>>,
}

impl RemoveBusinessCardUseCase {
    /// Create a new RemoveBusinessCardUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn Repository<BusinessCard>>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// An unknown id yields a failed result without attempting a delete.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the lookup fails.
    pub async fn execute(&self, id: BusinessCardId) -> Result<OperationResult, UseCaseError> {
        tracing::info!(business_card_id = %id, "Removing business card");

        let Some(card) = self.repository.get_by_id(id).await? else {
            tracing::warn!(business_card_id = %id, "Business card not found for removal");
            return Ok(OperationResult::failure(format!("Business card with id {id} not found.")));
        };

        let result = self.repository.remove(&card).await;
        if result.succeeded {
            tracing::info!(business_card_id = %id, "Business card removed successfully");
        } else {
            tracing::warn!(business_card_id = %id, reason = result.message(), "Business card could not be removed");
        }
        Ok(result)
    }
}
