//! Get All Business Cards Use Case
//!
//! Retrieves every stored business card.

use std::sync::Arc;

use crate::domain::gateways::Repository;
use crate::domain::models::business_card::BusinessCard;
use crate::shared::errors::UseCaseError;

/// Use case for listing all business cards
pub struct GetAllBusinessCardsUseCase {
    repository: Arc<dyn Repository<BusinessCard>>,
}

impl GetAllBusinessCardsUseCase {
    /// Create a new GetAllBusinessCardsUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn Repository<BusinessCard>>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<BusinessCard>, UseCaseError> {
        tracing::debug!("Getting all business cards");

        let cards = self.repository.get_all().await?;

        tracing::debug!(count = cards.len(), "Found business cards");
        Ok(cards)
    }
}
