//! Search Business Cards Use Case
//!
//! Finds business cards whose named field contains a search string.

use std::sync::Arc;

use crate::domain::gateways::Repository;
use crate::domain::models::business_card::{BusinessCard, BusinessCardField};
use crate::domain::models::predicate::{Case, Predicate};
use crate::shared::errors::UseCaseError;

/// Use case for single-field substring search
pub struct SearchBusinessCardsUseCase {
    repository: Arc<dyn Repository<BusinessCard>>,
}

impl SearchBusinessCardsUseCase {
    /// Create a new SearchBusinessCardsUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn Repository<BusinessCard>>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// `term` names the field (`name`, `gender`, `email`, `phone` or `address`,
    /// any case). The comparison ignores case.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::InvalidArgument` if `term` is not a searchable field.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, term: &str, search_string: &str) -> Result<Vec<BusinessCard>, UseCaseError> {
        let field = BusinessCardField::from_search_term(term).ok_or_else(|| {
            tracing::warn!(term, "Unsupported search term");
            UseCaseError::InvalidArgument(format!("Invalid search term '{term}'"))
        })?;

        tracing::debug!(?field, search_string, "Searching business cards");

        let predicate = Predicate::contains(field, search_string, Case::Insensitive);
        let cards = self.repository.get_by_filter(Some(&predicate)).await?;

        tracing::debug!(count = cards.len(), "Search completed");
        Ok(cards)
    }
}
