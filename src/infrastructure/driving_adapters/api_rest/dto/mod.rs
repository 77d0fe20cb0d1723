//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod business_card;

pub use business_card::{
    AddBusinessCardDto, BusinessCardDto, FilterQuery, ImportQuery, RemoveBusinessCardDto, ResultDto, SearchQuery,
};
