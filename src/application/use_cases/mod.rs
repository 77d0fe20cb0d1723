//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod business_cards;

pub use business_cards::{
    AddBusinessCardUseCase, ExportBusinessCardsUseCase, FilterBusinessCardsUseCase, GetAllBusinessCardsUseCase,
    ImportBusinessCardsUseCase, RemoveBusinessCardUseCase, SearchBusinessCardsUseCase,
};
