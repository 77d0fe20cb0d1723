//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod errors;

pub use errors::{ApiError, CodecError, DomainError, PhotoError, RepositoryError, UseCaseError};
