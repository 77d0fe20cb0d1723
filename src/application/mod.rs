//! Application Layer
//!
//! Contains use cases that orchestrate business logic, and the file codecs they use.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod codecs;
pub mod use_cases;
