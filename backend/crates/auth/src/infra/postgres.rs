//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::{
    admin_session::AdminSession,
    admin_user::{AdminUser, NewAdminUser},
};
use crate::domain::repository::{AdminSessionRepository, AdminUserRepository};
use crate::domain::value_object::{
    admin_user_id::AdminUserId, session_token::SessionToken, username::Username,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ADMIN_USER_COLUMNS: &str =
    "id, username, password_hash, salt, is_active, created_at, last_login_at";

// ============================================================================
// Admin User Repository Implementation
// ============================================================================

impl AdminUserRepository for PgAuthRepository {
    async fn create(&self, user: &NewAdminUser) -> AuthResult<AdminUser> {
        let row = sqlx::query_as::<_, AdminUserRow>(&format!(
            r#"
            INSERT INTO admin_users (username, password_hash, salt)
            VALUES ($1, $2, $3)
            RETURNING {ADMIN_USER_COLUMNS}
            "#
        ))
        .bind(user.username.as_str())
        .bind(user.password.hash_hex())
        .bind(user.password.salt_hex())
        .fetch_one(&self.pool)
        .await?;

        row.into_user()
    }

    async fn find_by_id(&self, id: AdminUserId) -> AuthResult<Option<AdminUser>> {
        let row = sqlx::query_as::<_, AdminUserRow>(&format!(
            "SELECT {ADMIN_USER_COLUMNS} FROM admin_users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminUserRow::into_user).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<AdminUser>> {
        let row = sqlx::query_as::<_, AdminUserRow>(&format!(
            "SELECT {ADMIN_USER_COLUMNS} FROM admin_users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminUserRow::into_user).transpose()
    }

    async fn count(&self) -> AuthResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admin_users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn record_login(&self, id: AdminUserId, at: DateTime<Utc>) -> AuthResult<()> {
        sqlx::query("UPDATE admin_users SET last_login_at = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_password(
        &self,
        id: AdminUserId,
        password: &HashedPassword,
    ) -> AuthResult<()> {
        sqlx::query("UPDATE admin_users SET password_hash = $2, salt = $3 WHERE id = $1")
            .bind(id)
            .bind(password.hash_hex())
            .bind(password.salt_hex())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Admin Session Repository Implementation
// ============================================================================

impl AdminSessionRepository for PgAuthRepository {
    async fn create(&self, session: &AdminSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_sessions (id, user_id, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.id.as_str())
        .bind(session.user_id)
        .bind(session.expires_at)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionToken) -> AuthResult<Option<AdminSession>> {
        let row = sqlx::query_as::<_, AdminSessionRow>(
            "SELECT id, user_id, expires_at, created_at FROM admin_sessions WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AdminSessionRow::into_session))
    }

    async fn delete(&self, id: &SessionToken) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM admin_sessions WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn delete_all_for_user(
        &self,
        user_id: AdminUserId,
        except: Option<&SessionToken>,
    ) -> AuthResult<u64> {
        let deleted = sqlx::query(
            r#"
            DELETE FROM admin_sessions
            WHERE user_id = $1
              AND ($2::TEXT IS NULL OR id <> $2)
            "#,
        )
        .bind(user_id)
        .bind(except.map(SessionToken::as_str))
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted)
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminUserRow {
    id: AdminUserId,
    username: String,
    password_hash: String,
    salt: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl AdminUserRow {
    fn into_user(self) -> AuthResult<AdminUser> {
        let password = HashedPassword::from_parts(self.password_hash, self.salt).map_err(|e| {
            AuthError::Internal(format!("Stored credential for admin {}: {e}", self.id))
        })?;

        Ok(AdminUser {
            id: self.id,
            username: Username::from_db(self.username),
            password,
            is_active: self.is_active,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AdminSessionRow {
    id: String,
    user_id: AdminUserId,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl AdminSessionRow {
    fn into_session(self) -> AdminSession {
        AdminSession {
            id: SessionToken::from_db(self.id),
            user_id: self.user_id,
            expires_at: self.expires_at,
            created_at: self.created_at,
        }
    }
}
