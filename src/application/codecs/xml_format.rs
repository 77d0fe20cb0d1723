//! XML Codec
//!
//! Reads a list of business cards laid out as
//! `<ArrayOfBusinessCardCsvXmlDto><BusinessCardCsvXmlDto>...</BusinessCardCsvXmlDto></ArrayOfBusinessCardCsvXmlDto>`.
//! The root element name is not checked and list items may also be named `BusinessCard`.

use serde::Deserialize;

use super::{strip_bom, RawRecord};
use crate::domain::models::business_card::BusinessCardRecord;
use crate::shared::errors::CodecError;

#[derive(Debug, Deserialize)]
struct XmlCardList {
    #[serde(rename = "BusinessCardCsvXmlDto", alias = "BusinessCard", default)]
    cards: Vec<XmlCard>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct XmlCard {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    gender: Option<String>,
    date_of_birth: Option<String>,
    address: Option<String>,
}

impl From<XmlCard> for RawRecord {
    fn from(card: XmlCard) -> Self {
        Self {
            name: card.name,
            email: card.email,
            phone: card.phone,
            gender: card.gender,
            date_of_birth: card.date_of_birth,
            address: card.address,
        }
    }
}

/// Parse business card records from XML bytes
///
/// # Errors
///
/// Returns `CodecError` if the document is not UTF-8, is not well formed, or a
/// record has no usable date of birth.
pub fn parse(bytes: &[u8]) -> Result<Vec<BusinessCardRecord>, CodecError> {
    let text = std::str::from_utf8(strip_bom(bytes))
        .map_err(|e| CodecError::Malformed(format!("XML file is not valid UTF-8: {e}")))?;

    let list: XmlCardList =
        quick_xml::de::from_str(text).map_err(|e| CodecError::Malformed(e.to_string()))?;

    list.cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| RawRecord::from(card).into_record(index + 1))
        .collect()
}
