//! Application error type and HTTP error mapping.
//!
//! Every error is resolved at the handler boundary into a JSON body of the
//! shape `{"status": <code>, "message": "..."}` with the status mirrored on
//! the transport. Nothing is retried internally.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

/// Application-level error taxonomy.
///
/// - `Validation` - malformed or missing client input, always a 400
/// - `NotFound` - no matching record (including undecodable tokens), a 404
/// - `Internal` - store or other unrecoverable per-request failures, a 500
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => {
                tracing::error!(error = %message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}
