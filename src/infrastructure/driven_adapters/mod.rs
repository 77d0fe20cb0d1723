//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - PostgreSQL repositories
//! - Photo encoding
//! - Configuration

pub mod config;
pub mod database;
pub mod photo;
pub mod repository;

pub use config::AppConfig;
pub use photo::ImagePhotoEncoder;
pub use repository::{PgTable, PostgresBusinessCardRepository, PostgresRepository};
