//! Business Card Domain Model
//!
//! The only persisted entity of the service, plus the shapes used to create it
//! and to exchange it through CSV/XML files.

use chrono::NaiveDate;

use crate::domain::models::predicate::{Entity, FieldValue};
use crate::shared::errors::DomainError;

pub const NAME_MAX_LEN: usize = 100;
pub const GENDER_MAX_LEN: usize = 10;
pub const EMAIL_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 15;
pub const ADDRESS_MAX_LEN: usize = 255;

/// Newtype wrapper for the store-generated business card identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusinessCardId(i32);

impl BusinessCardId {
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for BusinessCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BusinessCardId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Fields of a business card that predicates can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessCardField {
    Name,
    Gender,
    DateOfBirth,
    Email,
    Phone,
    Address,
}

impl BusinessCardField {
    /// Resolve a free-text search term (`name`, `gender`, `email`, `phone`, `address`)
    ///
    /// Matching is case-insensitive. Date of birth is not searchable by substring.
    #[must_use]
    pub fn from_search_term(term: &str) -> Option<Self> {
        match term.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "gender" => Some(Self::Gender),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "address" => Some(Self::Address),
            _ => None,
        }
    }
}

/// Data required to create a new business card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBusinessCard {
    pub name: String,
    pub gender: Option<String>,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Base64-encoded image content
    pub photo: Option<String>,
}

/// Plain interchange shape of a business card (no id, no photo)
///
/// This is what CSV and XML files carry and what listings expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCardRecord {
    pub name: String,
    pub gender: Option<String>,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Business card domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCard {
    id: Option<BusinessCardId>,
    name: String,
    gender: Option<String>,
    date_of_birth: NaiveDate,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    photo: Option<String>,
}

impl BusinessCard {
    /// Create a new, not yet persisted business card
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if a required field is blank or a field exceeds its length bound.
    pub fn new(data: NewBusinessCard) -> Result<Self, DomainError> {
        let name = required("name", data.name, NAME_MAX_LEN)?;
        let email = required("email", data.email, EMAIL_MAX_LEN)?;
        let gender = optional("gender", data.gender, GENDER_MAX_LEN)?;
        let phone = optional("phone", data.phone, PHONE_MAX_LEN)?;
        let address = optional("address", data.address, ADDRESS_MAX_LEN)?;

        Ok(Self {
            id: None,
            name,
            gender,
            date_of_birth: data.date_of_birth,
            email,
            phone,
            address,
            photo: data.photo.filter(|p| !p.is_empty()),
        })
    }

    /// Restore a business card from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: BusinessCardId,
        name: String,
        gender: Option<String>,
        date_of_birth: NaiveDate,
        email: String,
        phone: Option<String>,
        address: Option<String>,
        photo: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            gender,
            date_of_birth,
            email,
            phone,
            address,
            photo,
        }
    }

    /// Assign the identifier generated by the store
    ///
    /// An identifier that is already set is kept.
    #[must_use]
    pub fn with_id(self, id: BusinessCardId) -> Self {
        Self {
            id: self.id.or(Some(id)),
            ..self
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> Option<BusinessCardId> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    #[must_use]
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    #[must_use]
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }
}

impl Entity for BusinessCard {
    type Id = BusinessCardId;
    type Field = BusinessCardField;

    const NAME: &'static str = "BusinessCard";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn field(&self, field: Self::Field) -> FieldValue<'_> {
        match field {
            BusinessCardField::Name => FieldValue::Text(Some(&self.name)),
            BusinessCardField::Gender => FieldValue::Text(self.gender.as_deref()),
            BusinessCardField::DateOfBirth => FieldValue::Date(self.date_of_birth),
            BusinessCardField::Email => FieldValue::Text(Some(&self.email)),
            BusinessCardField::Phone => FieldValue::Text(self.phone.as_deref()),
            BusinessCardField::Address => FieldValue::Text(self.address.as_deref()),
        }
    }
}

fn required(field: &'static str, value: String, max: usize) -> Result<String, DomainError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(DomainError::MissingField(field));
    }
    check_length(field, &value, max)?;
    Ok(value)
}

fn optional(field: &'static str, value: Option<String>, max: usize) -> Result<Option<String>, DomainError> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(v) => {
            check_length(field, &v, max)?;
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::FieldTooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_data() -> NewBusinessCard {
        NewBusinessCard {
            name: "John Doe".to_string(),
            gender: Some("Male".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1993, 1, 1).unwrap(),
            email: "john@example.com".to_string(),
            phone: Some("123456789".to_string()),
            address: Some("123 Main St".to_string()),
            photo: None,
        }
    }

    #[test]
    fn test_business_card_new() {
        let data = create_test_data();
        let card = BusinessCard::new(data.clone()).unwrap();

        assert_eq!(card.id(), None);
        assert_eq!(card.name(), data.name);
        assert_eq!(card.gender(), Some("Male"));
        assert_eq!(card.date_of_birth(), data.date_of_birth);
        assert_eq!(card.email(), data.email);
        assert_eq!(card.phone(), Some("123456789"));
        assert_eq!(card.address(), Some("123 Main St"));
        assert_eq!(card.photo(), None);
    }

    #[test]
    fn test_business_card_new_trims_and_drops_blank_optionals() {
        let data = NewBusinessCard {
            name: "  Jane  ".to_string(),
            gender: Some("   ".to_string()),
            phone: Some(String::new()),
            photo: Some(String::new()),
            ..create_test_data()
        };
        let card = BusinessCard::new(data).unwrap();

        assert_eq!(card.name(), "Jane");
        assert_eq!(card.gender(), None);
        assert_eq!(card.phone(), None);
        assert_eq!(card.photo(), None);
    }

    #[test]
    fn test_business_card_new_requires_name_and_email() {
        let missing_name = NewBusinessCard {
            name: " ".to_string(),
            ..create_test_data()
        };
        assert!(matches!(
            BusinessCard::new(missing_name),
            Err(DomainError::MissingField("name"))
        ));

        let missing_email = NewBusinessCard {
            email: String::new(),
            ..create_test_data()
        };
        assert!(matches!(
            BusinessCard::new(missing_email),
            Err(DomainError::MissingField("email"))
        ));
    }

    #[test]
    fn test_business_card_new_enforces_length_bounds() {
        let long_phone = NewBusinessCard {
            phone: Some("1".repeat(PHONE_MAX_LEN + 1)),
            ..create_test_data()
        };
        assert!(matches!(
            BusinessCard::new(long_phone),
            Err(DomainError::FieldTooLong { field: "phone", max: PHONE_MAX_LEN })
        ));

        let max_name = NewBusinessCard {
            name: "é".repeat(NAME_MAX_LEN),
            ..create_test_data()
        };
        assert!(BusinessCard::new(max_name).is_ok());
    }

    #[test]
    fn test_with_id_keeps_existing_id() {
        let card = BusinessCard::new(create_test_data()).unwrap();
        let card = card.with_id(BusinessCardId::new(7));
        assert_eq!(card.id(), Some(BusinessCardId::new(7)));

        let card = card.with_id(BusinessCardId::new(9));
        assert_eq!(card.id(), Some(BusinessCardId::new(7)));
    }

    #[test]
    fn test_field_from_search_term() {
        assert_eq!(BusinessCardField::from_search_term("Name"), Some(BusinessCardField::Name));
        assert_eq!(BusinessCardField::from_search_term(" EMAIL "), Some(BusinessCardField::Email));
        assert_eq!(BusinessCardField::from_search_term("address"), Some(BusinessCardField::Address));
        assert_eq!(BusinessCardField::from_search_term("dateofbirth"), None);
        assert_eq!(BusinessCardField::from_search_term("photo"), None);
    }
}
