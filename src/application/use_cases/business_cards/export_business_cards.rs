//! Export Business Cards Use Case
//!
//! Renders one business card, or all of them, as a downloadable CSV file.

use std::sync::Arc;

use crate::application::codecs::csv_format;
use crate::domain::gateways::Repository;
use crate::domain::models::business_card::{BusinessCard, BusinessCardId, BusinessCardRecord};
use crate::shared::errors::UseCaseError;

/// File name of every CSV export
pub const EXPORT_FILE_NAME: &str = "BusinessCards.csv";

/// Content type of every CSV export
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

/// A rendered file ready to be sent as an attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub content: Vec<u8>,
}

/// Use case for exporting business cards to CSV
pub struct ExportBusinessCardsUseCase {
    repository: Arc<dyn Repository<BusinessCard>>,
}

impl ExportBusinessCardsUseCase {
    /// Create a new ExportBusinessCardsUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn Repository<BusinessCard>>) -> Self {
        Self { repository }
    }

    /// Export a single business card
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no card has this id.
    /// Returns `UseCaseError::Export` for any other failure.
    pub async fn execute_one(&self, id: BusinessCardId) -> Result<ExportedFile, UseCaseError> {
        tracing::info!(business_card_id = %id, "Exporting business card to CSV");

        let card = self.repository.get_by_id(id).await.map_err(export_failed)?.ok_or_else(|| {
            tracing::warn!(business_card_id = %id, "Business card not found for export");
            UseCaseError::NotFound {
                resource: "BusinessCard".to_string(),
                id: id.to_string(),
            }
        })?;

        render(&[BusinessCardRecord::from(&card)])
    }

    /// Export every business card
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Export` if the cards cannot be loaded or rendered.
    pub async fn execute_all(&self) -> Result<ExportedFile, UseCaseError> {
        let records: Vec<BusinessCardRecord> = self
            .repository
            .get_all()
            .await
            .map_err(export_failed)?
            .iter()
            .map(BusinessCardRecord::from)
            .collect();

        tracing::info!(count = records.len(), "Exporting business cards to CSV");
        render(&records)
    }
}

fn export_failed(error: impl std::fmt::Display) -> UseCaseError {
    tracing::error!(error = %error, "CSV export failed");
    UseCaseError::Export(error.to_string())
}

fn render(records: &[BusinessCardRecord]) -> Result<ExportedFile, UseCaseError> {
    let content = csv_format::render(records).map_err(export_failed)?;

    Ok(ExportedFile {
        file_name: EXPORT_FILE_NAME,
        content_type: EXPORT_CONTENT_TYPE,
        content,
    })
}
