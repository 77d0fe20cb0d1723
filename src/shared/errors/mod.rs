//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::infrastructure::driving_adapters::api_rest::middleware::current_request_id;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Errors raised while turning an uploaded photo into stored content
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("Photo could not be decoded: {0}")]
    Decode(String),

    #[error("Photo could not be encoded: {0}")]
    Encode(String),
}

/// Errors raised while reading or writing CSV/XML business card files
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{0}")]
    Malformed(String),

    #[error("record {record}: {message}")]
    Record { record: usize, message: String },
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File is empty.")]
    EmptyFile,

    #[error("Unsupported file type.")]
    UnsupportedFileType(String),

    #[error("Error importing {format}: {message}")]
    Import { format: &'static str, message: String },

    #[error("Error exporting CSV: {0}")]
    Export(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Photo(#[from] PhotoError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidArgument(_)
            | Self::EmptyFile
            | Self::UnsupportedFileType(_)
            | Self::Import { .. }
            | Self::Export(_)
            | Self::Domain(_)
            | Self::Photo(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Domain(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::EmptyFile => "EMPTY_FILE",
            Self::UnsupportedFileType(_) => "UNSUPPORTED_FILE_TYPE",
            Self::Import { .. } => "IMPORT_FAILED",
            Self::Export(_) => "EXPORT_FAILED",
            Self::Photo(_) => "INVALID_PHOTO",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(
                        errors
                            .iter()
                            .map(|e| {
                                let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                                FieldError {
                                    field: field.to_string(),
                                    message: message.to_string(),
                                }
                            })
                            .collect(),
                    )
                } else {
                    None
                };
                if let UseCaseError::Repository(e) = uc_error {
                    tracing::error!(error = %e, "Repository failure while handling request");
                }
                (uc_error.status_code(), uc_error.error_code().to_string(), uc_error.to_string(), details)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Unexpected error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message, details },
            request_id: current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}
