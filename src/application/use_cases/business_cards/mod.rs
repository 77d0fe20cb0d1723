//! Business Card Use Cases
//!
//! Business logic for managing business cards.

mod add_business_card;
mod export_business_cards;
mod filter_business_cards;
mod get_all_business_cards;
mod import_business_cards;
mod remove_business_card;
mod search_business_cards;

#[cfg(test)]
mod test_support;

pub use add_business_card::{AddBusinessCardInput, AddBusinessCardUseCase};
pub use export_business_cards::{ExportBusinessCardsUseCase, ExportedFile, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
pub use filter_business_cards::{BusinessCardFilter, FilterBusinessCardsUseCase};
pub use get_all_business_cards::GetAllBusinessCardsUseCase;
pub use import_business_cards::ImportBusinessCardsUseCase;
pub use remove_business_card::RemoveBusinessCardUseCase;
pub use search_business_cards::SearchBusinessCardsUseCase;
