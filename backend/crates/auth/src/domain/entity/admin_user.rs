//! Admin User Entity
//!
//! An account allowed to manage site content. Holds the stored credential;
//! only [`AdminIdentity`] ever leaves the service.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use serde::Serialize;

use crate::domain::value_object::{admin_user_id::AdminUserId, username::Username};

/// Admin user entity
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Serial primary key
    pub id: AdminUserId,
    /// Unique login handle
    pub username: Username,
    /// Argon2id digest and salt
    pub password: HashedPassword,
    /// Inactive accounts cannot log in
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
}

impl AdminUser {
    /// Check if user can login
    pub fn can_login(&self) -> bool {
        self.is_active
    }

    /// Public view of this account
    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            id: self.id,
            username: self.username.to_string(),
        }
    }
}

/// Values needed to insert a new admin
#[derive(Debug, Clone)]
pub struct NewAdminUser {
    pub username: Username,
    pub password: HashedPassword,
}

/// Id and username, nothing secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
    pub id: AdminUserId,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    #[test]
    fn test_identity_serializes_without_secrets() {
        let password = ClearTextPassword::for_verification("admin123".to_string())
            .hash(None)
            .unwrap();
        let user = AdminUser {
            id: AdminUserId::new(1),
            username: Username::new("admin").unwrap(),
            password,
            is_active: true,
            created_at: Utc::now(),
            last_login_at: None,
        };

        let json = serde_json::to_value(user.identity()).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "username": "admin" }));
        assert!(user.can_login());
    }
}
