//! CSV Codec
//!
//! Headers are matched case-insensitively and ignoring spaces, underscores and
//! dashes. Unknown columns are ignored and missing optional columns read as
//! empty. A file whose first row names none of the known columns is read as
//! headerless, in export column order.

use ::csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use super::{strip_bom, RawRecord, DATE_FORMAT};
use crate::domain::models::business_card::BusinessCardRecord;
use crate::shared::errors::CodecError;

/// Column order of exported files
pub const EXPORT_HEADER: [&str; 6] = ["Name", "Email", "Phone", "Gender", "DateOfBirth", "Address"];

#[derive(Debug, Clone, Copy)]
enum Column {
    Name,
    Email,
    Phone,
    Gender,
    DateOfBirth,
    Address,
}

const EXPORT_LAYOUT: [Column; 6] = [
    Column::Name,
    Column::Email,
    Column::Phone,
    Column::Gender,
    Column::DateOfBirth,
    Column::Address,
];

impl Column {
    fn from_header(header: &str) -> Option<Self> {
        let normalized: String = header
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "name" | "fullname" => Some(Self::Name),
            "email" | "emailaddress" => Some(Self::Email),
            "phone" | "phonenumber" => Some(Self::Phone),
            "gender" => Some(Self::Gender),
            "dateofbirth" | "dob" | "birthdate" => Some(Self::DateOfBirth),
            "address" => Some(Self::Address),
            _ => None,
        }
    }
}

/// Parse business card records from CSV bytes
///
/// # Errors
///
/// Returns `CodecError` if the bytes are not valid CSV or a row has no usable date of birth.
pub fn parse(bytes: &[u8]) -> Result<Vec<BusinessCardRecord>, CodecError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(strip_bom(bytes));

    let mut rows = reader.records();
    let Some(first) = rows.next() else {
        return Ok(Vec::new());
    };
    let first = first.map_err(|e| CodecError::Malformed(e.to_string()))?;

    let header: Vec<Option<Column>> = first.iter().map(Column::from_header).collect();
    let (layout, pending) = if header.iter().any(Option::is_some) {
        (header, None)
    } else {
        tracing::debug!("CSV file has no recognizable header row, using positional columns");
        (EXPORT_LAYOUT.iter().copied().map(Some).collect(), Some(first))
    };

    let mut records = Vec::new();
    let rows = pending.into_iter().map(Ok).chain(rows);
    for row in rows {
        let row = row.map_err(|e| CodecError::Malformed(e.to_string()))?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        let raw = raw_record(&layout, &row);
        records.push(raw.into_record(records.len() + 1)?);
    }

    Ok(records)
}

fn raw_record(layout: &[Option<Column>], row: &StringRecord) -> RawRecord {
    let mut raw = RawRecord::default();
    for (column, value) in layout.iter().zip(row.iter()) {
        let value = Some(value.to_string());
        match column {
            Some(Column::Name) => raw.name = value,
            Some(Column::Email) => raw.email = value,
            Some(Column::Phone) => raw.phone = value,
            Some(Column::Gender) => raw.gender = value,
            Some(Column::DateOfBirth) => raw.date_of_birth = value,
            Some(Column::Address) => raw.address = value,
            None => {}
        }
    }
    raw
}

/// Render records as CSV with the export header
///
/// Values containing delimiters, quotes or line breaks are quoted.
///
/// # Errors
///
/// Returns `CodecError` if the writer fails.
pub fn render<'a, I>(records: I) -> Result<Vec<u8>, CodecError>
where
    I: IntoIterator<Item = &'a BusinessCardRecord>,
{
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| CodecError::Malformed(e.to_string()))?;

    for record in records {
        let date_of_birth = record.date_of_birth.format(DATE_FORMAT).to_string();
        writer
            .write_record([
                record.name.as_str(),
                record.email.as_str(),
                record.phone.as_deref().unwrap_or_default(),
                record.gender.as_deref().unwrap_or_default(),
                date_of_birth.as_str(),
                record.address.as_deref().unwrap_or_default(),
            ])
            .map_err(|e| CodecError::Malformed(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| CodecError::Malformed(e.to_string()))
}
