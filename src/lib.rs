//! Business Card Manager API
//!
//! A Rust-based microservice for managing business cards, with CSV/XML bulk
//! import and CSV export, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
