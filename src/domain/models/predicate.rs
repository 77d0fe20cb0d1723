//! Entity Predicates
//!
//! Boolean expressions over an entity's fields. The same predicate can be
//! evaluated in memory with [`Predicate::matches`] or compiled to SQL by a
//! repository adapter.

use chrono::NaiveDate;

/// An entity that the generic repository can store and filter
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type, assigned by the store
    type Id: Copy + std::fmt::Display + Send + Sync + 'static;

    /// Enumeration of the fields predicates can address
    type Field: Copy + std::fmt::Debug + Send + Sync + 'static;

    /// Human readable entity name used in messages and logs
    const NAME: &'static str;

    /// Identifier, `None` until persisted
    fn id(&self) -> Option<Self::Id>;

    /// Current value of a field
    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

/// Borrowed view of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Date(NaiveDate),
}

/// Owned comparison operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Date(NaiveDate),
}

/// Case sensitivity of a text comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Sensitive,
    Insensitive,
}

/// Boolean expression over the fields `F` of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<F> {
    /// Matches every entity
    Always,
    /// Text field contains `needle`; absent values never match
    Contains { field: F, needle: String, case: Case },
    /// Field equals `value`; `case` only applies to text
    Equals { field: F, value: Value, case: Case },
    /// Every inner predicate matches
    And(Vec<Predicate<F>>),
}

impl<F: Copy> Predicate<F> {
    #[must_use]
    pub fn contains(field: F, needle: impl Into<String>, case: Case) -> Self {
        Self::Contains {
            field,
            needle: needle.into(),
            case,
        }
    }

    #[must_use]
    pub fn equals(field: F, value: Value, case: Case) -> Self {
        Self::Equals { field, value, case }
    }

    /// Combine with another predicate, folding away `Always` and flattening nested ands
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Always, p) | (p, Self::Always) => p,
            (Self::And(mut left), Self::And(right)) => {
                left.extend(right);
                Self::And(left)
            }
            (Self::And(mut left), p) => {
                left.push(p);
                Self::And(left)
            }
            (p, Self::And(mut right)) => {
                right.insert(0, p);
                Self::And(right)
            }
            (left, right) => Self::And(vec![left, right]),
        }
    }

    #[must_use]
    pub fn is_always(&self) -> bool {
        match self {
            Self::Always => true,
            Self::And(inner) => inner.iter().all(Predicate::is_always),
            _ => false,
        }
    }

    /// Evaluate the predicate against an entity
    pub fn matches<T>(&self, entity: &T) -> bool
    where
        T: Entity<Field = F>,
    {
        match self {
            Self::Always => true,
            Self::Contains { field, needle, case } => match entity.field(*field) {
                FieldValue::Text(Some(text)) => match case {
                    Case::Sensitive => text.contains(needle.as_str()),
                    Case::Insensitive => text.to_lowercase().contains(&needle.to_lowercase()),
                },
                FieldValue::Text(None) | FieldValue::Date(_) => false,
            },
            Self::Equals { field, value, case } => match (entity.field(*field), value) {
                (FieldValue::Text(Some(text)), Value::Text(expected)) => match case {
                    Case::Sensitive => text == expected,
                    Case::Insensitive => text.to_lowercase() == expected.to_lowercase(),
                },
                (FieldValue::Date(date), Value::Date(expected)) => date == *expected,
                _ => false,
            },
            Self::And(inner) => inner.iter().all(|p| p.matches(entity)),
        }
    }
}

impl<F> Default for Predicate<F> {
    fn default() -> Self {
        Self::Always
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::business_card::{BusinessCard, BusinessCardField, NewBusinessCard};

    fn card(name: &str, gender: Option<&str>, email: &str, phone: Option<&str>) -> BusinessCard {
        BusinessCard::new(NewBusinessCard {
            name: name.to_string(),
            gender: gender.map(str::to_string),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            email: email.to_string(),
            phone: phone.map(str::to_string),
            address: None,
            photo: None,
        })
        .unwrap()
    }

    #[test]
    fn test_always_matches_everything() {
        let p: Predicate<BusinessCardField> = Predicate::Always;
        assert!(p.matches(&card("Ann", None, "ann@example.com", None)));
        assert!(p.is_always());
    }

    #[test]
    fn test_contains_respects_case() {
        let c = card("John Doe", None, "John@Example.com", None);

        assert!(Predicate::contains(BusinessCardField::Name, "Doe", Case::Sensitive).matches(&c));
        assert!(!Predicate::contains(BusinessCardField::Name, "doe", Case::Sensitive).matches(&c));
        assert!(Predicate::contains(BusinessCardField::Email, "john@example", Case::Insensitive).matches(&c));
    }

    #[test]
    fn test_contains_never_matches_absent_value() {
        let c = card("John Doe", None, "john@example.com", None);
        assert!(!Predicate::contains(BusinessCardField::Phone, "", Case::Sensitive).matches(&c));
        assert!(!Predicate::contains(BusinessCardField::DateOfBirth, "1990", Case::Sensitive).matches(&c));
    }

    #[test]
    fn test_equals_text_and_date() {
        let c = card("John Doe", Some("Male"), "john@example.com", None);

        let gender = Predicate::equals(BusinessCardField::Gender, Value::Text("male".into()), Case::Insensitive);
        assert!(gender.matches(&c));

        let gender_strict = Predicate::equals(BusinessCardField::Gender, Value::Text("male".into()), Case::Sensitive);
        assert!(!gender_strict.matches(&c));

        let dob = Predicate::equals(
            BusinessCardField::DateOfBirth,
            Value::Date(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()),
            Case::Sensitive,
        );
        assert!(dob.matches(&c));

        let mismatched = Predicate::equals(BusinessCardField::Name, Value::Date(c.date_of_birth()), Case::Sensitive);
        assert!(!mismatched.matches(&c));
    }

    #[test]
    fn test_and_folds_always_and_flattens() {
        let a = Predicate::contains(BusinessCardField::Name, "a", Case::Sensitive);
        let b = Predicate::contains(BusinessCardField::Phone, "1", Case::Sensitive);
        let c = Predicate::contains(BusinessCardField::Email, "x", Case::Insensitive);

        assert_eq!(Predicate::Always.and(a.clone()), a);
        assert_eq!(a.clone().and(Predicate::Always), a);

        let combined = a.clone().and(b.clone()).and(c.clone());
        assert_eq!(combined, Predicate::And(vec![a, b, c]));
    }

    #[test]
    fn test_and_requires_all() {
        let c = card("John Doe", Some("Male"), "john@example.com", Some("555-1234"));

        let both = Predicate::contains(BusinessCardField::Name, "John", Case::Sensitive)
            .and(Predicate::contains(BusinessCardField::Phone, "555", Case::Sensitive));
        assert!(both.matches(&c));

        let one_fails = Predicate::contains(BusinessCardField::Name, "John", Case::Sensitive)
            .and(Predicate::contains(BusinessCardField::Phone, "999", Case::Sensitive));
        assert!(!one_fails.matches(&c));
    }
}
