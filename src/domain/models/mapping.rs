//! Shape Mapping
//!
//! Field-for-field conversions between the interchange record, the creation
//! data and the entity. Photos never travel through the interchange record.

use crate::domain::models::business_card::{BusinessCard, BusinessCardRecord, NewBusinessCard};
use crate::shared::errors::DomainError;

impl From<BusinessCardRecord> for NewBusinessCard {
    fn from(record: BusinessCardRecord) -> Self {
        Self {
            name: record.name,
            gender: record.gender,
            date_of_birth: record.date_of_birth,
            email: record.email,
            phone: record.phone,
            address: record.address,
            photo: None,
        }
    }
}

impl From<&BusinessCard> for BusinessCardRecord {
    fn from(card: &BusinessCard) -> Self {
        Self {
            name: card.name().to_string(),
            gender: card.gender().map(str::to_string),
            date_of_birth: card.date_of_birth(),
            email: card.email().to_string(),
            phone: card.phone().map(str::to_string),
            address: card.address().map(str::to_string),
        }
    }
}

impl From<BusinessCard> for BusinessCardRecord {
    fn from(card: BusinessCard) -> Self {
        Self::from(&card)
    }
}

impl TryFrom<BusinessCardRecord> for BusinessCard {
    type Error = DomainError;

    fn try_from(record: BusinessCardRecord) -> Result<Self, Self::Error> {
        BusinessCard::new(record.into())
    }
}
