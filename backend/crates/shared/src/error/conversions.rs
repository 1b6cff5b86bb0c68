//! Error conversions - constraint classification and response rendering
//!
//! Classifies database integrity errors for the crate-level error enums and
//! renders [`AppError`] as RFC 7807 problem JSON.

#[cfg(feature = "axum")]
use super::app_error::AppError;
#[cfg(feature = "axum")]
use crate::validation::FieldError;

// ============================================================================
// SQLx constraint classification (feature-gated)
// ============================================================================

/// Integrity constraint a database write ran into
#[cfg(feature = "sqlx")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique,
    ForeignKey,
    NotNull,
    Check,
}

/// Classify a PostgreSQL integrity error (SQLSTATE class 23).
///
/// Returns `None` for anything that is not a constraint violation; those
/// errors stay opaque 500s.
#[cfg(feature = "sqlx")]
pub fn constraint_violation(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    // https://www.postgresql.org/docs/current/errcodes-appendix.html
    match db_err.code()?.as_ref() {
        "23505" => Some(ConstraintViolation::Unique),
        "23503" => Some(ConstraintViolation::ForeignKey),
        "23502" => Some(ConstraintViolation::NotNull),
        "23514" => Some(ConstraintViolation::Check),
        _ => None,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request("Invalid data")
            .with_errors(vec![FieldError::new("body", rejection.body_text())])
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        // Missing parameters mean the route itself is wrong
        if rejection.status().is_server_error() {
            return AppError::internal("Internal server error").with_source(rejection);
        }
        AppError::bad_request("Invalid path parameter")
            .with_errors(vec![FieldError::new("path", rejection.body_text())])
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::bad_request("Invalid query string")
            .with_errors(vec![FieldError::new("query", rejection.body_text())])
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let mut body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
        });

        if let Some(action) = self.action() {
            body["action"] = serde_json::Value::from(action);
        }
        if !self.errors().is_empty() {
            body["errors"] = serde_json::to_value(self.errors()).unwrap_or_default();
        }

        (status, Json(body)).into_response()
    }
}
