//! Error types for the API server.
//!
//! ## Status Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Validation(messages)   → 400 {"errors": [...]}                         │
//! │  EmailTaken             → 400 {"error": "Email already registered"}     │
//! │  InvalidCredentials     → 401 {"error": "Invalid credentials"}          │
//! │  MissingToken           → 401 {"error": "Access denied"}                │
//! │  InvalidToken           → 403 {"error": "Invalid token"}                │
//! │  NotFound(what)         → 404 {"error": "<what> not found"}             │
//! │  Internal(detail)       → 500 {"error": "Server error"}                 │
//! │                           (detail goes to the log, never the client)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use stride_db::DbError;

/// API request errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed business validation; carries every message.
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Registration with an email that already has an account.
    #[error("Email already registered")]
    EmailTaken,

    /// Login with an unknown email or a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Protected route hit without a bearer token.
    #[error("Access denied")]
    MissingToken,

    /// Bearer token present but expired or not verifiable.
    #[error("Invalid token")]
    InvalidToken,

    /// Entity missing.
    #[error("{0} not found")]
    NotFound(String),

    /// Anything the client cannot fix; the detail is logged server-side.
    #[error("Server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": errors }))
            }
            ApiError::EmailTaken => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Email already registered" }),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Invalid credentials" }),
            ),
            ApiError::MissingToken => {
                (StatusCode::UNAUTHORIZED, json!({ "error": "Access denied" }))
            }
            ApiError::InvalidToken => {
                (StatusCode::FORBIDDEN, json!({ "error": "Invalid token" }))
            }
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{what} not found") }),
            ),
            ApiError::Internal(detail) => {
                error!(%detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Storage errors map to generic failures unless the route layer has
/// already narrowed them (e.g. register turns a unique violation into
/// [`ApiError::EmailTaken`]).
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, .. } => ApiError::NotFound(entity),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
