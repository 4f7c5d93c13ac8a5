//! Error handling for the Hawaii Climate API
//!
//! Every error is rendered as `{ "error": { "code", "message", "field"? } }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Data errors
    #[error("No measurements available")]
    NoData,

    #[error("Stored date is not a valid calendar date: {0}")]
    InvalidStoredDate(String),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// True when the store could not be reached at all, as opposed to a
    /// failing query
    fn is_store_unavailable(err: &sqlx::Error) -> bool {
        matches!(
            err,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoData => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(err) if Self::is_store_unavailable(err) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::InvalidStoredDate(_)
            | AppError::DatabaseError(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> ErrorDetail {
        match self {
            AppError::NoData => ErrorDetail {
                code: "NO_DATA".to_string(),
                message: "No measurements are available".to_string(),
                field: None,
            },
            AppError::InvalidStoredDate(date) => ErrorDetail {
                code: "INVALID_STORED_DATE".to_string(),
                message: format!("Stored measurement date '{}' could not be parsed", date),
                field: None,
            },
            AppError::Validation { field, message } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message: message.clone(),
                field: Some(field.clone()),
            },
            AppError::DatabaseError(err) if Self::is_store_unavailable(err) => ErrorDetail {
                code: "STORE_UNAVAILABLE".to_string(),
                message: "The climate data store is unavailable".to_string(),
                field: None,
            },
            AppError::DatabaseError(_) => ErrorDetail {
                code: "DATABASE_ERROR".to_string(),
                message: "A database error occurred".to_string(),
                field: None,
            },
            AppError::Internal(msg) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message: msg.clone(),
                field: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_detail = self.detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
