//! File Codecs
//!
//! Reading business cards from uploaded CSV/XML files and rendering them as CSV.

pub mod csv_format;
pub mod xml_format;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::models::business_card::BusinessCardRecord;
use crate::shared::errors::CodecError;

/// Date layout used in exported files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

/// Supported bulk import formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Xml,
}

impl ImportFormat {
    /// Resolve a file type tag such as `csv` or ` XML `
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Xml => "XML",
        }
    }

    /// Parse an uploaded file in this format
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the file is malformed or a record lacks a usable date of birth.
    pub fn parse(self, bytes: &[u8]) -> Result<Vec<BusinessCardRecord>, CodecError> {
        match self {
            Self::Csv => csv_format::parse(bytes),
            Self::Xml => xml_format::parse(bytes),
        }
    }
}

/// Parse a date of birth written either as a plain date or as a date-time
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%m/%d/%Y") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|date_time| date_time.date())
}

/// Fields of one record as read from a file, before type conversion
#[derive(Debug, Default)]
pub(crate) struct RawRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
}

impl RawRecord {
    /// Convert into an interchange record; `position` is 1-based and only used in messages
    pub fn into_record(self, position: usize) -> Result<BusinessCardRecord, CodecError> {
        let date_text = non_blank(self.date_of_birth).ok_or_else(|| CodecError::Record {
            record: position,
            message: "DateOfBirth is missing".to_string(),
        })?;
        let date_of_birth = parse_date(&date_text).ok_or_else(|| CodecError::Record {
            record: position,
            message: format!("DateOfBirth '{date_text}' is not a valid date"),
        })?;

        Ok(BusinessCardRecord {
            name: non_blank(self.name).unwrap_or_default(),
            gender: non_blank(self.gender),
            date_of_birth,
            email: non_blank(self.email).unwrap_or_default(),
            phone: non_blank(self.phone),
            address: non_blank(self.address),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Drop a leading UTF-8 byte order mark
pub(crate) fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}
