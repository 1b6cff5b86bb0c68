//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationErrors;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username, inactive account or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password change with a wrong current password
    #[error("Current password is incorrect")]
    InvalidCurrentPassword,

    /// New password violates the password policy
    #[error("{0}")]
    WeakPassword(String),

    /// Session missing, malformed, unknown or expired
    #[error("Authentication required")]
    Unauthenticated,

    /// Session owner is deactivated
    #[error("Account is disabled")]
    UserInactive,

    /// Malformed request body
    #[error("Invalid data: {0}")]
    Validation(ValidationErrors),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::InvalidCurrentPassword
            | AuthError::WeakPassword(_)
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::UserInactive => StatusCode::FORBIDDEN,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::InvalidCurrentPassword
            | AuthError::WeakPassword(_)
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UserInactive => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message; the cause is only logged.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(errors) => {
                AppError::bad_request("Invalid data").with_errors(errors.errors().to_vec())
            }
            AuthError::Unauthenticated => {
                AppError::unauthorized(self.to_string()).with_action("Log in again")
            }
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidCurrentPassword => {
                tracing::warn!("Password change with wrong current password");
            }
            AuthError::UserInactive => {
                tracing::warn!("Request from deactivated admin");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(errors: ValidationErrors) -> Self {
        AuthError::Validation(errors)
    }
}
