//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod photo_encoder;
pub mod repository;

pub use photo_encoder::PhotoEncoder;
pub use repository::Repository;
