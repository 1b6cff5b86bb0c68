//! Current Admin Use Case
//!
//! Resolves the owner of a validated session.

use std::sync::Arc;

use crate::domain::entity::{admin_session::AdminSession, admin_user::AdminIdentity};
use crate::domain::repository::AdminUserRepository;
use crate::error::{AuthError, AuthResult};

/// Current admin use case
pub struct CurrentAdminUseCase<U>
where
    U: AdminUserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CurrentAdminUseCase<U>
where
    U: AdminUserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, session: &AdminSession) -> AuthResult<AdminIdentity> {
        let user = self
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        if !user.can_login() {
            return Err(AuthError::UserInactive);
        }

        Ok(user.identity())
    }
}
