//! Add Business Card Use Case
//!
//! Stores a new business card, converting an uploaded photo to Base64 first.

use std::sync::Arc;

use crate::domain::gateways::{PhotoEncoder, Repository};
use crate::domain::models::business_card::{BusinessCard, NewBusinessCard};
use crate::domain::models::operation_result::OperationResult;
use crate::shared::errors::{PhotoError, UseCaseError};

/// Input of the add operation: card data plus the raw bytes of an optional photo file
#[derive(Debug, Clone)]
pub struct AddBusinessCardInput {
    pub card: NewBusinessCard,
    pub photo_file: Option<Vec<u8>>,
}

/// Use case for adding a business card
pub struct AddBusinessCardUseCase {
    repository: Arc<dyn Repository<BusinessCard>>,
    photo_encoder: Arc<dyn PhotoEncoder>,
}

impl AddBusinessCardUseCase {
    /// Create a new AddBusinessCardUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn Repository<BusinessCard>>, photo_encoder: Arc<dyn PhotoEncoder>) -> Self {
        Self {
            repository,
            photo_encoder,
        }
    }

    /// Execute the use case
    ///
    /// Store failures are reported through the returned `OperationResult`.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the card data violates an entity invariant.
    /// Returns `UseCaseError::Photo` if the photo file is not a usable image.
    pub async fn execute(&self, input: AddBusinessCardInput) -> Result<OperationResult, UseCaseError> {
        let AddBusinessCardInput { mut card, photo_file } = input;
        tracing::info!(name = %card.name, has_photo = photo_file.is_some(), "Adding business card");

        if let Some(bytes) = photo_file.filter(|b| !b.is_empty()) {
            card.photo = Some(self.encode_photo(bytes).await?);
        }

        let business_card = BusinessCard::new(card)?;
        let result = self.repository.add(&business_card).await;

        if result.succeeded {
            tracing::info!("Business card added successfully");
        } else {
            tracing::warn!(reason = result.message(), "Business card could not be added");
        }
        Ok(result)
    }

    /// Runs the CPU-bound encode on the blocking pool
    async fn encode_photo(&self, bytes: Vec<u8>) -> Result<String, PhotoError> {
        let encoder = Arc::clone(&self.photo_encoder);
        tokio::task::spawn_blocking(move || encoder.encode(&bytes))
            .await
            .map_err(|e| PhotoError::Encode(format!("photo task failed: {e}")))?
    }
}
