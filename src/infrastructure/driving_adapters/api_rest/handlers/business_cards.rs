//! Business Card Handlers
//!
//! HTTP handlers for the business card endpoints, mounted under `/api/BusinessCard`.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use validator::Validate;

use crate::application::codecs::parse_date;
use crate::application::use_cases::business_cards::{BusinessCardFilter, ExportedFile};
use crate::domain::models::business_card::BusinessCardId;
use crate::infrastructure::driving_adapters::api_rest::dto::business_card::{
    AddBusinessCardDto, BusinessCardDto, FilterQuery, ImportQuery, RemoveBusinessCardDto, ResultDto, SearchQuery,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for business card endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/AddBusinessCard", post(add_business_card))
        .route("/ImportBusinessCards", post(import_business_cards))
        .route("/GetAllBusinessCards", get(get_all_business_cards))
        .route("/FilterBusinessCards", get(filter_business_cards))
        .route("/SearchBusinessCards", get(search_business_cards))
        .route("/RemoveBusinessCard", delete(remove_business_card))
        .route("/export/csv", get(export_all_to_csv))
        .route("/export/csv/{id}", get(export_to_csv))
}

/// POST /AddBusinessCard - Add a business card from a multipart form
///
/// Form field names are matched case-insensitively: `Name`, `Email`, `Phone`,
/// `Gender`, `DateOfBirth`, `Address` and the optional `PhotoFile`.
///
/// # Responses
///
/// * 200 OK - Result of the insert (a store failure is `succeeded: false`)
/// * 400 Bad Request - Validation error or undecodable photo
#[axum::debug_handler]
async fn add_business_card(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResultDto>, ApiError> {
    let dto = read_add_form(multipart).await?;
    dto.validate()?;

    let input = dto
        .into_input()
        .ok_or_else(|| ApiError::BadRequest("DateOfBirth is required".to_string()))?;

    let result = state.add_business_card_use_case.execute(input).await?;

    Ok(Json(ResultDto::from(result)))
}

/// POST /ImportBusinessCards?fileType=csv|xml - Bulk import from an uploaded file
///
/// # Responses
///
/// * 200 OK - The imported records
/// * 400 Bad Request - Empty file, unsupported type, malformed content or failed insert
#[axum::debug_handler]
async fn import_business_cards(
    State(state): State<AppState>,
    Query(query): Query<ImportQuery>,
    mut multipart: Multipart,
) -> Result<Json<Vec<BusinessCardDto>>, ApiError> {
    let mut file = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name().is_some_and(|name| name.eq_ignore_ascii_case("file")) {
            file = field.bytes().await?.to_vec();
        }
    }

    let records = state
        .import_business_cards_use_case
        .execute(&file, &query.file_type)
        .await?;

    Ok(Json(records.into_iter().map(BusinessCardDto::from).collect()))
}

/// GET /GetAllBusinessCards - List every business card
#[axum::debug_handler]
async fn get_all_business_cards(State(state): State<AppState>) -> Result<Json<Vec<BusinessCardDto>>, ApiError> {
    let cards = state.get_all_business_cards_use_case.execute().await?;

    Ok(Json(cards.into_iter().map(BusinessCardDto::from).collect()))
}

/// GET /FilterBusinessCards - Cards matching every supplied criterion
///
/// # Responses
///
/// * 200 OK - Matching cards
/// * 400 Bad Request - `dob` is not a date
#[axum::debug_handler]
async fn filter_business_cards(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<BusinessCardDto>>, ApiError> {
    let filter = BusinessCardFilter::try_from(query).map_err(ApiError::BadRequest)?;

    let cards = state.filter_business_cards_use_case.execute(&filter).await?;

    Ok(Json(cards.into_iter().map(BusinessCardDto::from).collect()))
}

/// GET /SearchBusinessCards?term=&searchString= - Single field substring search
///
/// # Responses
///
/// * 200 OK - Matching cards
/// * 400 Bad Request - `term` is not a searchable field
#[axum::debug_handler]
async fn search_business_cards(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<BusinessCardDto>>, ApiError> {
    let cards = state
        .search_business_cards_use_case
        .execute(&query.term, &query.search_string)
        .await?;

    Ok(Json(cards.into_iter().map(BusinessCardDto::from).collect()))
}

/// DELETE /RemoveBusinessCard - Remove the card named by `{ "Id": n }`
///
/// An unknown id is reported as `succeeded: false`, not as 404.
#[axum::debug_handler]
async fn remove_business_card(
    State(state): State<AppState>,
    Json(dto): Json<RemoveBusinessCardDto>,
) -> Result<Json<ResultDto>, ApiError> {
    let result = state
        .remove_business_card_use_case
        .execute(BusinessCardId::new(dto.id))
        .await?;

    Ok(Json(ResultDto::from(result)))
}

/// GET /export/csv - Download every card as CSV
#[axum::debug_handler]
async fn export_all_to_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let file = state.export_business_cards_use_case.execute_all().await?;

    Ok(attachment(file))
}

/// GET /export/csv/{id} - Download one card as CSV
///
/// # Responses
///
/// * 200 OK - CSV attachment
/// * 404 Not Found - No card has this id
/// * 400 Bad Request - Any other export failure
#[axum::debug_handler]
async fn export_to_csv(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response, ApiError> {
    let file = state
        .export_business_cards_use_case
        .execute_one(BusinessCardId::new(id))
        .await?;

    Ok(attachment(file))
}

fn attachment(file: ExportedFile) -> Response {
    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.content,
    )
        .into_response()
}

/// Collect the add-card form fields, ignoring unknown ones
async fn read_add_form(mut multipart: Multipart) -> Result<AddBusinessCardDto, ApiError> {
    let mut dto = AddBusinessCardDto::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_ascii_lowercase();
        match name.as_str() {
            "photofile" | "photo" => {
                let bytes = field.bytes().await?;
                dto.photo_file = (!bytes.is_empty()).then(|| bytes.to_vec());
            }
            "name" => dto.name = field.text().await?.trim().to_string(),
            "email" => dto.email = field.text().await?.trim().to_string(),
            "phone" => dto.phone = optional(field.text().await?),
            "gender" => dto.gender = optional(field.text().await?),
            "address" => dto.address = optional(field.text().await?),
            "dateofbirth" | "date_of_birth" | "dob" => {
                let raw = field.text().await?;
                dto.date_of_birth = match raw.trim() {
                    "" => None,
                    value => Some(
                        parse_date(value)
                            .ok_or_else(|| ApiError::BadRequest(format!("DateOfBirth '{value}' is not a valid date")))?,
                    ),
                };
            }
            _ => tracing::debug!(field = %name, "Ignoring unknown form field"),
        }
    }

    Ok(dto)
}

fn optional(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
