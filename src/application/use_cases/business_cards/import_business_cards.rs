//! Import Business Cards Use Case
//!
//! Parses an uploaded CSV or XML file and stores one business card per record.

use std::sync::Arc;

use crate::application::codecs::ImportFormat;
use crate::domain::gateways::Repository;
use crate::domain::models::business_card::{BusinessCard, BusinessCardRecord};
use crate::shared::errors::UseCaseError;

/// Use case for bulk importing business cards
pub struct ImportBusinessCardsUseCase {
    repository: Arc<dyn Repository<BusinessCard>>,
}

impl ImportBusinessCardsUseCase {
    /// Create a new ImportBusinessCardsUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn Repository<BusinessCard>>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// The whole file is parsed and validated before anything is stored. Records
    /// are then inserted one at a time in file order; the first failed insert stops
    /// the import; records stored before it are kept.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::EmptyFile` if the file has no content.
    /// Returns `UseCaseError::UnsupportedFileType` if `file_type` is neither `csv` nor `xml`.
    /// Returns `UseCaseError::Import` if the file cannot be parsed, a record is invalid,
    /// or a record could not be stored.
    pub async fn execute(&self, file: &[u8], file_type: &str) -> Result<Vec<BusinessCardRecord>, UseCaseError> {
        if file.is_empty() {
            return Err(UseCaseError::EmptyFile);
        }
        let format =
            ImportFormat::from_tag(file_type).ok_or_else(|| UseCaseError::UnsupportedFileType(file_type.to_string()))?;

        tracing::info!(format = format.label(), size = file.len(), "Importing business cards");

        let records = format.parse(file).map_err(|e| UseCaseError::Import {
            format: format.label(),
            message: e.to_string(),
        })?;

        let cards = records
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, record)| {
                BusinessCard::try_from(record).map_err(|e| UseCaseError::Import {
                    format: format.label(),
                    message: format!("record {}: {}", index + 1, e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (index, card) in cards.iter().enumerate() {
            let result = self.repository.add(card).await;
            if !result.succeeded {
                tracing::warn!(
                    record = index + 1,
                    imported = index,
                    reason = result.message(),
                    "Import aborted on failed insert"
                );
                return Err(UseCaseError::Import {
                    format: format.label(),
                    message: format!("record {}: {}", index + 1, result.message()),
                });
            }
        }

        tracing::info!(count = records.len(), "Business cards imported successfully");
        Ok(records)
    }
}
