//! Login Use Case
//!
//! Authenticates an admin and creates a session.

use std::sync::Arc;

use chrono::Utc;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::hashing::verify_password;
use crate::domain::entity::{admin_session::AdminSession, admin_user::AdminIdentity};
use crate::domain::repository::{AdminSessionRepository, AdminUserRepository};
use crate::domain::value_object::username::Username;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub identity: AdminIdentity,
    pub session: AdminSession,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: AdminUserRepository,
    S: AdminSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let password = ClearTextPassword::for_verification(input.password);

        // A malformed username is just an unknown one
        let user = match Username::new(&input.username) {
            Ok(username) => self.user_repo.find_by_username(&username).await?,
            Err(_) => None,
        };

        // Absent and inactive accounts still pay for one hash
        let user = user.filter(|user| user.can_login());
        let stored = user.as_ref().map(|user| user.password.clone());
        let password_valid =
            verify_password(stored, password, self.config.password_pepper.clone()).await?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let session = AdminSession::new(user.id, self.config.session_ttl_chrono()?);
        self.user_repo.record_login(user.id, Utc::now()).await?;
        self.session_repo.create(&session).await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            expires_at = %session.expires_at,
            "Admin logged in"
        );

        Ok(LoginOutput {
            identity: user.identity(),
            session,
        })
    }
}
