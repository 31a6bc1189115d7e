//! Application error taxonomy and HTTP response mapping.
//!
//! Every request-scoped failure is one of four cases: invalid input (400),
//! failed authentication (401), a missing or inaccessible record (404), or an
//! unexpected internal failure (500). Errors serialize as a flat JSON object:
//! `{"<field>": "<message>"}` when the failure is tied to a request field,
//! `{"error": "<message>"}` otherwise. Internal details are logged, never
//! returned to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or duplicate input. `field` keys the error body when the
    /// failure belongs to a single request field.
    #[error("{message}")]
    Validation {
        field: Option<String>,
        message: String,
    },

    /// Bad credentials or an invalid/expired token.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Missing record, or one the caller is not allowed to see. Ownership
    /// violations surface here so foreign records are indistinguishable from
    /// nonexistent ones.
    #[error("{message}")]
    NotFound { message: String },

    /// Unexpected failure. The message stays server-side.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            field: None,
            message: message.into(),
        }
    }

    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
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
        let (status, key, message) = match self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                field.unwrap_or_else(|| "error".to_string()),
                message,
            ),
            AppError::Unauthorized { message } => {
                (StatusCode::UNAUTHORIZED, "error".to_string(), message)
            }
            AppError::NotFound { message } => {
                (StatusCode::NOT_FOUND, "error".to_string(), message)
            }
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error".to_string(),
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ key: message }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // HashMap iteration order is unstable; sort so the reported field is
        // deterministic when several fail at once.
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.keys().collect();
        fields.sort();

        for field in fields {
            if let Some(errs) = field_errors.get(field)
                && let Some(first) = errs.first()
            {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                return AppError::field_error(field.to_string(), message);
            }
        }

        AppError::bad_request("Invalid input")
    }
}
