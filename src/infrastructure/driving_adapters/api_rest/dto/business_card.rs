//! Business Card DTOs
//!
//! Data transfer objects for business card API endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::codecs::parse_date;
use crate::application::use_cases::business_cards::{AddBusinessCardInput, BusinessCardFilter};
use crate::domain::models::business_card::{BusinessCard, BusinessCardRecord, NewBusinessCard};
use crate::domain::models::operation_result::OperationResult;

/// Add-card form, assembled from a multipart request
///
/// Only presence and length are checked, the same bounds imported records get.
#[derive(Debug, Clone, Default, Validate)]
pub struct AddBusinessCardDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Email must be between 1 and 100 characters"))]
    pub email: String,

    #[validate(length(max = 15, message = "Phone must be at most 15 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 10, message = "Gender must be at most 10 characters"))]
    pub gender: Option<String>,

    #[validate(required(message = "DateOfBirth is required"))]
    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = 255, message = "Address must be at most 255 characters"))]
    pub address: Option<String>,

    pub photo_file: Option<Vec<u8>>,
}

impl AddBusinessCardDto {
    /// Convert into use case input; `None` when the date of birth is missing
    #[must_use]
    pub fn into_input(self) -> Option<AddBusinessCardInput> {
        Some(AddBusinessCardInput {
            card: NewBusinessCard {
                name: self.name,
                gender: self.gender,
                date_of_birth: self.date_of_birth?,
                email: self.email,
                phone: self.phone,
                address: self.address,
                photo: None,
            },
            photo_file: self.photo_file,
        })
    }
}

/// Business card response DTO
///
/// The six interchange fields, plus the id when the card is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
}

impl From<BusinessCardRecord> for BusinessCardDto {
    fn from(record: BusinessCardRecord) -> Self {
        Self {
            id: None,
            name: record.name,
            email: record.email,
            phone: record.phone,
            gender: record.gender,
            date_of_birth: record.date_of_birth,
            address: record.address,
        }
    }
}

impl From<BusinessCard> for BusinessCardDto {
    fn from(card: BusinessCard) -> Self {
        let id = card.id().map(|id| id.value());
        Self {
            id,
            ..Self::from(BusinessCardRecord::from(card))
        }
    }
}

/// Outcome of a write operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDto {
    pub succeeded: bool,
    pub message: Option<String>,
}

impl From<OperationResult> for ResultDto {
    fn from(result: OperationResult) -> Self {
        Self {
            succeeded: result.succeeded,
            message: result.message,
        }
    }
}

/// Body of a remove request
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveBusinessCardDto {
    #[serde(alias = "Id")]
    pub id: i32,
}

/// Query string of the import endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportQuery {
    #[serde(default, rename = "fileType", alias = "filetype", alias = "file_type")]
    pub file_type: String,
}

/// Query string of the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
    #[serde(default, rename = "searchString", alias = "search_string")]
    pub search_string: String,
}

/// Query string of the filter endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    pub name: Option<String>,
    #[serde(alias = "dateOfBirth", alias = "date_of_birth")]
    pub dob: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<FilterQuery> for BusinessCardFilter {
    type Error = String;

    fn try_from(query: FilterQuery) -> Result<Self, Self::Error> {
        let date_of_birth = match query.dob.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => Some(parse_date(raw).ok_or_else(|| format!("dob '{raw}' is not a valid date"))?),
            None => None,
        };

        Ok(Self {
            name: query.name,
            date_of_birth,
            phone: query.phone,
            gender: query.gender,
            email: query.email,
        })
    }
}
