//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer (PostgreSQL and in-memory).

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::entity::{
    admin_session::AdminSession,
    admin_user::{AdminUser, NewAdminUser},
};
use crate::domain::value_object::{
    admin_user_id::AdminUserId, session_token::SessionToken, username::Username,
};
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(AdminUserRepository: Send)]
pub trait LocalAdminUserRepository {
    /// Insert a new admin, returning the stored row
    async fn create(&self, user: &NewAdminUser) -> AuthResult<AdminUser>;

    /// Find admin by ID
    async fn find_by_id(&self, id: AdminUserId) -> AuthResult<Option<AdminUser>>;

    /// Find admin by exact username
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<AdminUser>>;

    /// Number of admin rows
    async fn count(&self) -> AuthResult<i64>;

    /// Stamp `last_login_at`
    async fn record_login(&self, id: AdminUserId, at: DateTime<Utc>) -> AuthResult<()>;

    /// Replace digest and salt together
    async fn update_password(&self, id: AdminUserId, password: &HashedPassword)
    -> AuthResult<()>;
}

/// Session store
#[trait_variant::make(AdminSessionRepository: Send)]
pub trait LocalAdminSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AdminSession) -> AuthResult<()>;

    /// Find session by token (expired rows included)
    async fn find_by_id(&self, id: &SessionToken) -> AuthResult<Option<AdminSession>>;

    /// Delete a session, `true` if a row was removed
    async fn delete(&self, id: &SessionToken) -> AuthResult<bool>;

    /// Delete all sessions for a user (except one, if given)
    async fn delete_all_for_user(
        &self,
        user_id: AdminUserId,
        except: Option<&SessionToken>,
    ) -> AuthResult<u64>;

    /// Delete every session whose expiry has passed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
