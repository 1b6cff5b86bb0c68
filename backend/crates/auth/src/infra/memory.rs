//! In-memory Repository Implementation
//!
//! Same contract as [`PgAuthRepository`](super::postgres::PgAuthRepository),
//! backed by a `tokio::sync::RwLock`. Used by tests and database-less runs.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use tokio::sync::RwLock;

use crate::domain::entity::{
    admin_session::AdminSession,
    admin_user::{AdminUser, NewAdminUser},
};
use crate::domain::repository::{AdminSessionRepository, AdminUserRepository};
use crate::domain::value_object::{
    admin_user_id::AdminUserId, session_token::SessionToken, username::Username,
};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Store {
    users: Vec<AdminUser>,
    sessions: HashMap<SessionToken, AdminSession>,
    next_user_id: i32,
}

/// Memory-backed auth repository; clones share state
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the active flag (no HTTP surface does this)
    pub async fn set_active(&self, id: AdminUserId, is_active: bool) {
        let mut store = self.store.write().await;
        if let Some(user) = store.users.iter_mut().find(|user| user.id == id) {
            user.is_active = is_active;
        }
    }

    /// Number of stored sessions, expired ones included
    pub async fn session_count(&self) -> usize {
        self.store.read().await.sessions.len()
    }
}

impl AdminUserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &NewAdminUser) -> AuthResult<AdminUser> {
        let mut store = self.store.write().await;

        if store.users.iter().any(|u| u.username == user.username) {
            return Err(AuthError::Internal(format!(
                "Admin username already exists: {}",
                user.username
            )));
        }

        store.next_user_id += 1;
        let created = AdminUser {
            id: AdminUserId::new(store.next_user_id),
            username: user.username.clone(),
            password: user.password.clone(),
            is_active: true,
            created_at: Utc::now(),
            last_login_at: None,
        };
        store.users.push(created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: AdminUserId) -> AuthResult<Option<AdminUser>> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<AdminUser>> {
        let store = self.store.read().await;
        Ok(store
            .users
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn count(&self) -> AuthResult<i64> {
        Ok(self.store.read().await.users.len() as i64)
    }

    async fn record_login(&self, id: AdminUserId, at: DateTime<Utc>) -> AuthResult<()> {
        let mut store = self.store.write().await;
        if let Some(user) = store.users.iter_mut().find(|user| user.id == id) {
            user.last_login_at = Some(at);
        }
        Ok(())
    }

    async fn update_password(
        &self,
        id: AdminUserId,
        password: &HashedPassword,
    ) -> AuthResult<()> {
        let mut store = self.store.write().await;
        if let Some(user) = store.users.iter_mut().find(|user| user.id == id) {
            user.password = password.clone();
        }
        Ok(())
    }
}

impl AdminSessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &AdminSession) -> AuthResult<()> {
        let mut store = self.store.write().await;
        store.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionToken) -> AuthResult<Option<AdminSession>> {
        Ok(self.store.read().await.sessions.get(id).cloned())
    }

    async fn delete(&self, id: &SessionToken) -> AuthResult<bool> {
        Ok(self.store.write().await.sessions.remove(id).is_some())
    }

    async fn delete_all_for_user(
        &self,
        user_id: AdminUserId,
        except: Option<&SessionToken>,
    ) -> AuthResult<u64> {
        let mut store = self.store.write().await;
        let before = store.sessions.len();
        store
            .sessions
            .retain(|id, session| session.user_id != user_id || Some(id) == except);
        Ok((before - store.sessions.len()) as u64)
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let mut store = self.store.write().await;
        let before = store.sessions.len();
        store
            .sessions
            .retain(|_, session| !session.is_expired_at(now));
        Ok((before - store.sessions.len()) as u64)
    }
}
