//! Table mapping for business cards

use chrono::NaiveDate;
use sqlx::query_builder::Separated;
use sqlx::Postgres;

use super::PgTable;
use crate::domain::models::business_card::{BusinessCard, BusinessCardField, BusinessCardId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the business_cards table
#[derive(Debug, sqlx::FromRow)]
pub struct BusinessCardRow {
    id: i32,
    name: String,
    gender: Option<String>,
    date_of_birth: NaiveDate,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    photo: Option<String>,
}

impl TryFrom<BusinessCardRow> for BusinessCard {
    type Error = RepositoryError;

    fn try_from(row: BusinessCardRow) -> Result<Self, Self::Error> {
        if row.id <= 0 {
            return Err(RepositoryError::Mapping(format!("invalid business card id {}", row.id)));
        }

        Ok(BusinessCard::restore(
            BusinessCardId::new(row.id),
            row.name,
            row.gender,
            row.date_of_birth,
            row.email,
            row.phone,
            row.address,
            row.photo,
        ))
    }
}

impl PgTable for BusinessCard {
    const TABLE: &'static str = "business_cards";

    const SELECT_COLUMNS: &'static str = "id, name, gender, date_of_birth, email, phone, address, photo";

    const INSERT_COLUMNS: &'static [&'static str] =
        &["name", "gender", "date_of_birth", "email", "phone", "address", "photo"];

    type Row = BusinessCardRow;

    type Key = i32;

    fn from_row(row: Self::Row) -> Result<Self, RepositoryError> {
        BusinessCard::try_from(row)
    }

    fn key(id: BusinessCardId) -> i32 {
        id.value()
    }

    fn column(field: BusinessCardField) -> &'static str {
        match field {
            BusinessCardField::Name => "name",
            BusinessCardField::Gender => "gender",
            BusinessCardField::DateOfBirth => "date_of_birth",
            BusinessCardField::Email => "email",
            BusinessCardField::Phone => "phone",
            BusinessCardField::Address => "address",
        }
    }

    fn bind_insert(&self, values: &mut Separated<'_, 'static, Postgres, &'static str>) {
        values
            .push_bind(self.name().to_string())
            .push_bind(self.gender().map(str::to_string))
            .push_bind(self.date_of_birth())
            .push_bind(self.email().to_string())
            .push_bind(self.phone().map(str::to_string))
            .push_bind(self.address().map(str::to_string))
            .push_bind(self.photo().map(str::to_string));
    }
}
