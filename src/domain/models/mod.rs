//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod business_card;
pub mod mapping;
pub mod operation_result;
pub mod predicate;

pub use business_card::{BusinessCard, BusinessCardField, BusinessCardId, BusinessCardRecord, NewBusinessCard};
pub use operation_result::OperationResult;
pub use predicate::{Case, Entity, FieldValue, Predicate, Value};
