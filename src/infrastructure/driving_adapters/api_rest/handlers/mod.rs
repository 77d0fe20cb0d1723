//! HTTP Handlers
//!
//! One module per resource; each exposes a `router()`.

pub mod business_cards;
