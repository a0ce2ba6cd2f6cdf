use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// A user- or ingestion-supplied value that cannot be turned into typed state.
///
/// Raised at selection/ingestion time so the engine never sees a half-parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed duration range '{0}': expected '<min>-<max> months'")]
    MalformedDurationRange(String),

    #[error("duration range must be positive, got {min}-{max}")]
    NonPositiveDurationRange { min: u32, max: u32 },

    #[error("duration range is inverted: {min} > {max}")]
    InvertedDurationRange { min: u32, max: u32 },

    #[error("malformed listing duration '{0}': expected '<n> months'")]
    MalformedListingDuration(String),

    #[error("unknown listing type '{0}'")]
    UnknownListingType(String),

    #[error("unknown paid filter '{0}': expected 'paid' or 'unpaid'")]
    UnknownPaidFilter(String),

    #[error("listing {id} has an empty stipend")]
    MissingStipend { id: u64 },

    #[error("duplicate listing id {0}")]
    DuplicateListingId(u64),

    #[error("listing {id}: {source}")]
    InvalidListing {
        id: u64,
        #[source]
        source: Box<ValidationError>,
    },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A body, query string or path segment the extractors couldn't decode.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(e) => {
                tracing::warn!("Rejected filter input: {e}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::MalformedRequest(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
