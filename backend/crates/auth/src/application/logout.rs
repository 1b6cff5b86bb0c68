//! Logout Use Case
//!
//! Destroys an admin session. Idempotent.

use std::sync::Arc;

use crate::domain::repository::AdminSessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: AdminSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: AdminSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Missing, malformed and unknown tokens are a no-op
    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<()> {
        let Some(token) = session_token.and_then(SessionToken::parse) else {
            return Ok(());
        };

        if self.session_repo.delete(&token).await? {
            tracing::info!(session = ?token, "Admin logged out");
        }
        Ok(())
    }
}
