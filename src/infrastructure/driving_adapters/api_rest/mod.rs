//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::application::use_cases::business_cards::{
    AddBusinessCardUseCase, ExportBusinessCardsUseCase, FilterBusinessCardsUseCase, GetAllBusinessCardsUseCase,
    ImportBusinessCardsUseCase, RemoveBusinessCardUseCase, SearchBusinessCardsUseCase,
};
use crate::domain::gateways::{PhotoEncoder, Repository};
use crate::domain::models::business_card::BusinessCard;
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Base path of the business card endpoints
pub const BUSINESS_CARD_BASE_PATH: &str = "/api/BusinessCard";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub add_business_card_use_case: Arc<AddBusinessCardUseCase>,
    pub import_business_cards_use_case: Arc<ImportBusinessCardsUseCase>,
    pub get_all_business_cards_use_case: Arc<GetAllBusinessCardsUseCase>,
    pub search_business_cards_use_case: Arc<SearchBusinessCardsUseCase>,
    pub filter_business_cards_use_case: Arc<FilterBusinessCardsUseCase>,
    pub remove_business_card_use_case: Arc<RemoveBusinessCardUseCase>,
    pub export_business_cards_use_case: Arc<ExportBusinessCardsUseCase>,
}

impl AppState {
    /// Wire every use case to the given adapters
    #[must_use]
    pub fn new(
        config: Arc<AppConfig>,
        repository: Arc<dyn Repository<BusinessCard>>,
        photo_encoder: Arc<dyn PhotoEncoder>,
    ) -> Self {
        Self {
            config,
            add_business_card_use_case: Arc::new(AddBusinessCardUseCase::new(repository.clone(), photo_encoder)),
            import_business_cards_use_case: Arc::new(ImportBusinessCardsUseCase::new(repository.clone())),
            get_all_business_cards_use_case: Arc::new(GetAllBusinessCardsUseCase::new(repository.clone())),
            search_business_cards_use_case: Arc::new(SearchBusinessCardsUseCase::new(repository.clone())),
            filter_business_cards_use_case: Arc::new(FilterBusinessCardsUseCase::new(repository.clone())),
            remove_business_card_use_case: Arc::new(RemoveBusinessCardUseCase::new(repository.clone())),
            export_business_cards_use_case: Arc::new(ExportBusinessCardsUseCase::new(repository)),
        }
    }
}

/// Build the API router: every endpoint, the upload limit and request ids
///
/// Tracing and CORS layers are left to the caller.
pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state.config.server.max_upload_bytes;

    Router::new()
        .nest(BUSINESS_CARD_BASE_PATH, handlers::business_cards::router())
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}
