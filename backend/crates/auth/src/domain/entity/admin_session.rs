//! Admin Session Entity
//!
//! Server-side session referenced by the `adminSessionId` cookie.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{admin_user_id::AdminUserId, session_token::SessionToken};

/// Admin session entity
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Random token, also the cookie value
    pub id: SessionToken,
    /// Owning admin
    pub user_id: AdminUserId,
    /// Session is valid strictly before this instant
    pub expires_at: DateTime<Utc>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl AdminSession {
    /// Create a new session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: AdminUserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: SessionToken::generate(),
            user_id,
            expires_at: now + ttl,
            created_at: now,
        }
    }

    /// Check expiry against an explicit clock reading
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_expires_after_ttl() {
        let session = AdminSession::new(AdminUserId::new(1), Duration::hours(24));
        let ttl = session.expires_at - session.created_at;
        assert_eq!(ttl, Duration::hours(24));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let session = AdminSession::new(AdminUserId::new(1), Duration::minutes(5));
        assert!(!session.is_expired_at(session.expires_at - Duration::milliseconds(1)));
        assert!(session.is_expired_at(session.expires_at));
    }

    #[test]
    fn test_each_session_gets_its_own_token() {
        let a = AdminSession::new(AdminUserId::new(1), Duration::hours(1));
        let b = AdminSession::new(AdminUserId::new(1), Duration::hours(1));
        assert_ne!(a.id, b.id);
    }
}
