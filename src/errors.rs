//! Centralized error handling.
//!
//! Provides a unified error type for the entire application, with automatic
//! conversion into the toast-shaped JSON body the frontend displays.
//! Errors here are either local routing/validation failures or failures
//! reported by (or reaching) the upstream REST API.

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
    // Session & authorization (routing-level only; the backend re-checks)
    #[error("Authentication required")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation (superficial form checks mirrored from the frontend)
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Backend-reported failure: the upstream answered with success=false
    // or a non-2xx status. The message is what the user sees in the toast.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    // Transport failure reaching the upstream API
    #[error("Upstream API unavailable")]
    Http(#[from] reqwest::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body. `message` is the text the frontend toasts.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for the client
    fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::Http(_) => "UPSTREAM_UNAVAILABLE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Pass the backend's verdict through unchanged where possible
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            AppError::Http(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Show full message for client errors and backend verdicts
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Upstream { message, .. } => message.clone(),

            // Hide details for transport/internal errors
            AppError::Http(e) => {
                tracing::error!("Upstream request failed: {:?}", e);
                "The service is temporarily unavailable. Please try again.".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            success: false,
            code: self.code().to_string(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// A backend-reported failure with a fallback message when the
    /// upstream did not supply one.
    pub fn upstream(status: u16, message: Option<String>) -> Self {
        AppError::Upstream {
            status,
            message: message.unwrap_or_else(|| "The request could not be completed".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_keeps_backend_message() {
        let err = AppError::upstream(409, Some("You have already joined this event".into()));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.user_message(), "You have already joined this event");
    }

    #[test]
    fn upstream_error_without_message_uses_fallback() {
        let err = AppError::upstream(500, None);
        assert_eq!(err.user_message(), "The request could not be completed");
    }

    #[test]
    fn validation_error_is_bad_request() {
        let err = AppError::validation("Rating must be between 1 and 5 stars");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
