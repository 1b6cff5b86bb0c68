//! Validate Session Use Case
//!
//! Resolves a cookie token to a live session. Consulted on every protected
//! request; nothing is cached and expiry never slides.

use std::sync::Arc;

use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::AdminSessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Validate session use case
pub struct ValidateSessionUseCase<S>
where
    S: AdminSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> ValidateSessionUseCase<S>
where
    S: AdminSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<AdminSession> {
        let token = session_token
            .and_then(SessionToken::parse)
            .ok_or(AuthError::Unauthenticated)?;

        let session = self
            .session_repo
            .find_by_id(&token)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        if session.is_expired() {
            // Best-effort removal; the request is rejected either way
            if let Err(e) = self.session_repo.delete(&token).await {
                tracing::warn!(error = %e, "Failed to delete expired admin session");
            }
            tracing::debug!(session = ?token, "Admin session expired");
            return Err(AuthError::Unauthenticated);
        }

        Ok(session)
    }
}

/// Cleanup expired sessions use case
///
/// Startup housekeeping; callers log failures and carry on.
pub struct CleanupExpiredSessionsUseCase<S>
where
    S: AdminSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> CleanupExpiredSessionsUseCase<S>
where
    S: AdminSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self) -> AuthResult<u64> {
        let deleted = self.session_repo.cleanup_expired().await?;
        tracing::info!(sessions_deleted = deleted, "Cleaned up expired admin sessions");
        Ok(deleted)
    }
}
