//! Filter Business Cards Use Case
//!
//! Combines up to five optional criteria into a single predicate.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::gateways::Repository;
use crate::domain::models::business_card::{BusinessCard, BusinessCardField};
use crate::domain::models::predicate::{Case, Predicate, Value};
use crate::shared::errors::UseCaseError;

/// Optional filter criteria; blank text criteria are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessCardFilter {
    /// Name contains (case-sensitive)
    pub name: Option<String>,
    /// Exact date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Phone contains (case-sensitive)
    pub phone: Option<String>,
    /// Gender equals, ignoring case
    pub gender: Option<String>,
    /// Email contains, ignoring case
    pub email: Option<String>,
}

impl BusinessCardFilter {
    /// Build the conjunction of every supplied criterion
    #[must_use]
    pub fn to_predicate(&self) -> Predicate<BusinessCardField> {
        let mut predicate = Predicate::Always;

        if let Some(name) = non_blank(self.name.as_deref()) {
            predicate = predicate.and(Predicate::contains(BusinessCardField::Name, name, Case::Sensitive));
        }
        if let Some(date) = self.date_of_birth {
            predicate = predicate.and(Predicate::equals(
                BusinessCardField::DateOfBirth,
                Value::Date(date),
                Case::Sensitive,
            ));
        }
        if let Some(phone) = non_blank(self.phone.as_deref()) {
            predicate = predicate.and(Predicate::contains(BusinessCardField::Phone, phone, Case::Sensitive));
        }
        if let Some(gender) = non_blank(self.gender.as_deref()) {
            predicate = predicate.and(Predicate::equals(
                BusinessCardField::Gender,
                Value::Text(gender.to_string()),
                Case::Insensitive,
            ));
        }
        if let Some(email) = non_blank(self.email.as_deref()) {
            predicate = predicate.and(Predicate::contains(BusinessCardField::Email, email, Case::Insensitive));
        }

        predicate
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Use case for filtering business cards
pub struct FilterBusinessCardsUseCase {
    repository: Arc<dyn Repository<BusinessCard>>,
}

impl FilterBusinessCardsUseCase {
    /// Create a new FilterBusinessCardsUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn Repository<BusinessCard>>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, filter: &BusinessCardFilter) -> Result<Vec<BusinessCard>, UseCaseError> {
        tracing::debug!(?filter, "Filtering business cards");

        let predicate = filter.to_predicate();
        let cards = if predicate.is_always() {
            self.repository.get_by_filter(None).await?
        } else {
            self.repository.get_by_filter(Some(&predicate)).await?
        };

        tracing::debug!(count = cards.len(), "Filter completed");
        Ok(cards)
    }
}
