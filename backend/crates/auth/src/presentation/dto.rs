//! API DTOs (Data Transfer Objects)

use kernel::validation::{Validate, ValidationErrors};
use platform::password::MIN_PASSWORD_LENGTH;
use serde::{Deserialize, Serialize};

use crate::domain::entity::admin_user::AdminIdentity;

// ============================================================================
// Login
// ============================================================================

/// Login request
///
/// Missing fields deserialize as empty and are reported by [`Validate`].
/// Only presence is checked here; any other bad credential is a 401.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("username", &self.username);
        if self.password.is_empty() {
            errors.add("password", "is required");
        }
        errors.into_result()
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: AdminIdentity,
}

// ============================================================================
// Session
// ============================================================================

/// Current admin response
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub user: AdminIdentity,
}

/// Plain confirmation
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Change Password
// ============================================================================

/// Change password request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl Validate for ChangePasswordRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.current_password.is_empty() {
            errors.add("currentPassword", "is required");
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add(
                "newPassword",
                format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
            );
        }
        errors.into_result()
    }
}
