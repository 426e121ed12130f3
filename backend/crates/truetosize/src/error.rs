//! True-to-size Error Types
//!
//! This module provides domain-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// True-to-size result type alias
pub type TtsResult<T> = Result<T, TtsError>;

/// True-to-size error variants
///
/// These map to appropriate HTTP status codes and can be converted to
/// `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum TtsError {
    /// Request body carried zero JSON objects
    #[error("Request body is empty")]
    EmptyBody,

    /// GET without a shoeId parameter and without a body
    #[error("Missing shoeId query parameter")]
    MissingShoeId,

    /// shoeId query parameter did not parse as an integer
    #[error("Invalid shoeId query parameter")]
    InvalidShoeId(#[source] std::num::ParseIntError),

    /// shoeId absent from a rating object (decodes as zero)
    #[error("shoeId must be a non-zero integer")]
    ShoeIdRequired,

    /// trueToSize value outside the inclusive 1-5 range
    #[error("trueToSize must be an integer between 1 and 5, got {0}")]
    ValueOutOfRange(i32),

    /// Batch insert with zero rating rows
    #[error("No ratings to insert")]
    EmptyBatch,

    /// Batch select with zero shoe ids
    #[error("No shoe ids to select")]
    EmptyShoeIds,

    /// Single-shoe lookup found zero ratings
    #[error("No ratings recorded for shoe {0}")]
    NoRatings(i32),

    /// HTTP method other than GET/POST on the resource
    #[error("Method {0} is not supported")]
    MethodNotSupported(Method),

    /// Request body failed to decode as JSON
    #[error("Malformed request body: {0}")]
    Json(#[from] serde_json::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TtsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TtsError::EmptyBody
            | TtsError::MissingShoeId
            | TtsError::InvalidShoeId(_)
            | TtsError::ShoeIdRequired
            | TtsError::ValueOutOfRange(_)
            | TtsError::EmptyBatch
            | TtsError::EmptyShoeIds
            | TtsError::Json(_) => StatusCode::BAD_REQUEST,
            TtsError::NoRatings(_) => StatusCode::NOT_FOUND,
            TtsError::MethodNotSupported(_) => StatusCode::NOT_IMPLEMENTED,
            TtsError::Database(_) | TtsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TtsError::EmptyBody
            | TtsError::MissingShoeId
            | TtsError::InvalidShoeId(_)
            | TtsError::ShoeIdRequired
            | TtsError::ValueOutOfRange(_)
            | TtsError::EmptyBatch
            | TtsError::EmptyShoeIds
            | TtsError::Json(_) => ErrorKind::BadRequest,
            TtsError::NoRatings(_) => ErrorKind::NotFound,
            TtsError::MethodNotSupported(_) => ErrorKind::NotImplemented,
            TtsError::Database(_) | TtsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TtsError::Database(e) => {
                tracing::error!(error = %e, "True-to-size database error");
            }
            TtsError::Internal(msg) => {
                tracing::error!(message = %msg, "True-to-size internal error");
            }
            TtsError::MethodNotSupported(method) => {
                tracing::warn!(method = %method, "Unsupported method on truetosize resource");
            }
            TtsError::NoRatings(shoe_id) => {
                tracing::debug!(shoe_id = shoe_id, "No ratings recorded");
            }
            _ => {
                tracing::warn!(error = %self, "True-to-size request rejected");
            }
        }
    }
}

impl From<TtsError> for AppError {
    fn from(err: TtsError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Only the generic status text reaches the client; details stay in logs
        (status, self.kind().as_str()).into_response()
    }
}
