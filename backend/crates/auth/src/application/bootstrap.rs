//! Bootstrap Admin Use Case
//!
//! Startup reconciliation: seed the default admin when the credential store
//! is empty. Existing admins are never touched.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::hashing::hash_password;
use crate::domain::entity::admin_user::{AdminIdentity, NewAdminUser};
use crate::domain::repository::AdminUserRepository;
use crate::domain::value_object::username::Username;
use crate::error::{AuthError, AuthResult};

/// Bootstrap admin use case
pub struct BootstrapAdminUseCase<U>
where
    U: AdminUserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> BootstrapAdminUseCase<U>
where
    U: AdminUserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// `Some` with the seeded admin, `None` if admins already existed
    pub async fn execute(&self) -> AuthResult<Option<AdminIdentity>> {
        if self.user_repo.count().await? > 0 {
            tracing::debug!("Admin account present, skipping bootstrap");
            return Ok(None);
        }

        let username = Username::new(&self.config.default_admin_username)
            .map_err(|e| AuthError::Internal(format!("Invalid default admin username: {e}")))?;
        let password = ClearTextPassword::new(self.config.default_admin_password.clone())
            .map_err(|e| AuthError::WeakPassword(e.to_string()))?;

        let hashed = hash_password(password, self.config.password_pepper.clone()).await?;
        let user = self
            .user_repo
            .create(&NewAdminUser {
                username,
                password: hashed,
            })
            .await?;

        tracing::warn!(
            user_id = %user.id,
            username = %user.username,
            "Created default admin account; change its password"
        );

        Ok(Some(user.identity()))
    }
}
