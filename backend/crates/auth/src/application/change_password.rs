//! Change Password Use Case
//!
//! Replaces the session owner's credential after re-verifying the current
//! password. Other sessions of the same admin are revoked; the calling
//! session stays valid.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::hashing::{hash_password, verify_password};
use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::{AdminSessionRepository, AdminUserRepository};
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<U, S>
where
    U: AdminUserRepository,
    S: AdminSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> ChangePasswordUseCase<U, S>
where
    U: AdminUserRepository,
    S: AdminSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Returns the number of other sessions revoked
    ///
    /// The current password is verified before the new one is checked
    /// against the policy.
    pub async fn execute(
        &self,
        session: &AdminSession,
        input: ChangePasswordInput,
    ) -> AuthResult<u64> {
        let user = self
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        if !user.can_login() {
            return Err(AuthError::UserInactive);
        }

        let current_password = ClearTextPassword::for_verification(input.current_password);
        let pepper = self.config.password_pepper.clone();
        let current_valid =
            verify_password(Some(user.password.clone()), current_password, pepper.clone()).await?;
        if !current_valid {
            return Err(AuthError::InvalidCurrentPassword);
        }

        let new_password = ClearTextPassword::new(input.new_password)
            .map_err(|e| AuthError::WeakPassword(e.to_string()))?;

        let hashed = hash_password(new_password, pepper).await?;
        self.user_repo.update_password(user.id, &hashed).await?;

        let revoked = self
            .session_repo
            .delete_all_for_user(user.id, Some(&session.id))
            .await?;

        tracing::info!(
            user_id = %user.id,
            sessions_revoked = revoked,
            "Admin password changed"
        );

        Ok(revoked)
    }
}
