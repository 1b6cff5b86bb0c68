//! Use-case and router tests for the auth crate, run against the in-memory
//! repository.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::*;
use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::{AdminSessionRepository, AdminUserRepository};
use crate::domain::value_object::username::Username;
use crate::error::AuthError;
use crate::infra::InMemoryAuthRepository;

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::development())
}

/// Repository with the default admin (admin / admin123) seeded
async fn seeded() -> (Arc<InMemoryAuthRepository>, Arc<AuthConfig>) {
    let repo = Arc::new(InMemoryAuthRepository::new());
    let config = test_config();
    BootstrapAdminUseCase::new(repo.clone(), config.clone())
        .execute()
        .await
        .unwrap()
        .expect("empty store should be seeded");
    (repo, config)
}

async fn login(
    repo: &Arc<InMemoryAuthRepository>,
    config: &Arc<AuthConfig>,
    username: &str,
    password: &str,
) -> Result<LoginOutput, AuthError> {
    LoginUseCase::new(repo.clone(), repo.clone(), config.clone())
        .execute(LoginInput {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await
}

async fn validate(repo: &Arc<InMemoryAuthRepository>, token: &str) -> Result<AdminSession, AuthError> {
    ValidateSessionUseCase::new(repo.clone())
        .execute(Some(token))
        .await
}

#[cfg(test)]
mod bootstrap_tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_seeds_once() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let use_case = BootstrapAdminUseCase::new(repo.clone(), test_config());

        let seeded = use_case.execute().await.unwrap().unwrap();
        assert_eq!(seeded.username, "admin");

        assert!(use_case.execute().await.unwrap().is_none());
        assert_eq!(AdminUserRepository::count(repo.as_ref()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_weak_default_password() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig {
            default_admin_password: "short".to_string(),
            ..AuthConfig::development()
        });

        let result = BootstrapAdminUseCase::new(repo.clone(), config).execute().await;
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
        assert_eq!(AdminUserRepository::count(repo.as_ref()).await.unwrap(), 0);
    }
}

#[cfg(test)]
mod login_tests {
    use super::*;
    use chrono::{Duration, Utc};
    use chrono::DateTime;
    use platform::password::HashedPassword;

    use crate::domain::entity::admin_user::{AdminUser, NewAdminUser};
    use crate::domain::value_object::admin_user_id::AdminUserId;
    use crate::error::AuthResult;

    /// Credential store whose `last_login_at` write always fails
    struct BrokenBookkeeping(Arc<InMemoryAuthRepository>);

    impl AdminUserRepository for BrokenBookkeeping {
        async fn create(&self, user: &NewAdminUser) -> AuthResult<AdminUser> {
            AdminUserRepository::create(self.0.as_ref(), user).await
        }

        async fn find_by_id(&self, id: AdminUserId) -> AuthResult<Option<AdminUser>> {
            AdminUserRepository::find_by_id(self.0.as_ref(), id).await
        }

        async fn find_by_username(&self, username: &Username) -> AuthResult<Option<AdminUser>> {
            self.0.find_by_username(username).await
        }

        async fn count(&self) -> AuthResult<i64> {
            self.0.count().await
        }

        async fn record_login(&self, _id: AdminUserId, _at: DateTime<Utc>) -> AuthResult<()> {
            Err(AuthError::Internal("bookkeeping unavailable".into()))
        }

        async fn update_password(
            &self,
            id: AdminUserId,
            password: &HashedPassword,
        ) -> AuthResult<()> {
            self.0.update_password(id, password).await
        }
    }

    #[tokio::test]
    async fn test_failed_bookkeeping_leaves_no_session() {
        let (repo, config) = seeded().await;
        let users = Arc::new(BrokenBookkeeping(repo.clone()));

        let result = LoginUseCase::new(users, repo.clone(), config)
            .execute(LoginInput {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::Internal(_))));
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_valid_credentials_create_session() {
        let (repo, config) = seeded().await;

        let before = Utc::now();
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();

        assert_eq!(output.identity.username, "admin");
        let expected = before + Duration::hours(24);
        let drift = (output.session.expires_at - expected).num_seconds().abs();
        assert!(drift <= 5, "expiry should be ~24h from now");

        let stored = AdminSessionRepository::find_by_id(repo.as_ref(), &output.session.id)
            .await
            .unwrap();
        assert!(stored.is_some());

        let user = AdminUserRepository::find_by_id(repo.as_ref(), output.identity.id)
            .await
            .unwrap()
            .unwrap();
        assert!(user.last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_username_is_normalized() {
        let (repo, config) = seeded().await;
        assert!(login(&repo, &config, "  admin ", "admin123").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_fail_alike() {
        let (repo, config) = seeded().await;

        let wrong_password = login(&repo, &config, "admin", "nope-nope").await;
        let unknown_user = login(&repo, &config, "ghost", "admin123").await;
        let malformed_user = login(&repo, &config, &"x".repeat(80), "admin123").await;

        assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
        assert!(matches!(unknown_user, Err(AuthError::InvalidCredentials)));
        assert!(matches!(malformed_user, Err(AuthError::InvalidCredentials)));
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_inactive_admin_cannot_login() {
        let (repo, config) = seeded().await;
        let admin = AdminUserRepository::find_by_username(
            repo.as_ref(),
            &Username::new("admin").unwrap(),
        )
        .await
        .unwrap()
        .unwrap();
        repo.set_active(admin.id, false).await;

        let result = login(&repo, &config, "admin", "admin123").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_concurrent_sessions_are_allowed() {
        let (repo, config) = seeded().await;
        let first = login(&repo, &config, "admin", "admin123").await.unwrap();
        let second = login(&repo, &config, "admin", "admin123").await.unwrap();

        assert_ne!(first.session.id, second.session.id);
        assert!(validate(&repo, first.session.id.as_str()).await.is_ok());
        assert!(validate(&repo, second.session.id.as_str()).await.is_ok());
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_unknown_and_malformed_tokens_are_rejected() {
        let (repo, _) = seeded().await;
        let use_case = ValidateSessionUseCase::new(repo.clone());

        for token in [None, Some(""), Some("garbage")] {
            assert!(matches!(
                use_case.execute(token).await,
                Err(AuthError::Unauthenticated)
            ));
        }

        let never_issued = crate::domain::value_object::session_token::SessionToken::generate();
        assert!(matches!(
            use_case.execute(Some(never_issued.as_str())).await,
            Err(AuthError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected_and_removed() {
        let (repo, config) = seeded().await;
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();

        let expired = AdminSession::new(output.identity.id, Duration::seconds(-1));
        AdminSessionRepository::create(repo.as_ref(), &expired)
            .await
            .unwrap();
        assert_eq!(repo.session_count().await, 2);

        let result = validate(&repo, expired.id.as_str()).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
        assert_eq!(repo.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_logout_invalidates_session() {
        let (repo, config) = seeded().await;
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();
        let token = output.session.id.as_str();

        LogoutUseCase::new(repo.clone())
            .execute(Some(token))
            .await
            .unwrap();

        assert!(matches!(
            validate(&repo, token).await,
            Err(AuthError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let (repo, config) = seeded().await;
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();
        let use_case = LogoutUseCase::new(repo.clone());

        use_case.execute(None).await.unwrap();
        use_case.execute(Some("garbage")).await.unwrap();
        use_case
            .execute(Some(output.session.id.as_str()))
            .await
            .unwrap();
        use_case
            .execute(Some(output.session.id.as_str()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_cleanup_removes_only_expired() {
        let (repo, config) = seeded().await;
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();
        let expired = AdminSession::new(output.identity.id, Duration::seconds(-10));
        AdminSessionRepository::create(repo.as_ref(), &expired)
            .await
            .unwrap();

        let deleted = CleanupExpiredSessionsUseCase::new(repo.clone())
            .execute()
            .await
            .unwrap();
        assert_eq!(deleted, 1);
        assert!(validate(&repo, output.session.id.as_str()).await.is_ok());
    }

    #[tokio::test]
    async fn test_current_admin() {
        let (repo, config) = seeded().await;
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();
        let use_case = CurrentAdminUseCase::new(repo.clone());

        let identity = use_case.execute(&output.session).await.unwrap();
        assert_eq!(identity, output.identity);

        repo.set_active(output.identity.id, false).await;
        assert!(matches!(
            use_case.execute(&output.session).await,
            Err(AuthError::UserInactive)
        ));
    }
}

#[cfg(test)]
mod change_password_tests {
    use super::*;

    async fn change(
        repo: &Arc<InMemoryAuthRepository>,
        config: &Arc<AuthConfig>,
        session: &AdminSession,
        current: &str,
        new: &str,
    ) -> Result<u64, AuthError> {
        ChangePasswordUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(
                session,
                ChangePasswordInput {
                    current_password: current.to_string(),
                    new_password: new.to_string(),
                },
            )
            .await
    }

    #[tokio::test]
    async fn test_wrong_current_password_changes_nothing() {
        let (repo, config) = seeded().await;
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();
        let before = AdminUserRepository::find_by_id(repo.as_ref(), output.identity.id)
            .await
            .unwrap()
            .unwrap();

        let result = change(&repo, &config, &output.session, "not-it-at-all", "brand-new-pass").await;
        assert!(matches!(result, Err(AuthError::InvalidCurrentPassword)));

        let after = AdminUserRepository::find_by_id(repo.as_ref(), output.identity.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(before.password.hash_hex(), after.password.hash_hex());
        assert_eq!(before.password.salt_hex(), after.password.salt_hex());
    }

    #[tokio::test]
    async fn test_weak_new_password_is_rejected() {
        let (repo, config) = seeded().await;
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();

        let result = change(&repo, &config, &output.session, "admin123", "short").await;
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
        assert!(login(&repo, &config, "admin", "admin123").await.is_ok());
    }

    #[tokio::test]
    async fn test_current_password_checked_before_policy() {
        let (repo, config) = seeded().await;
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();

        let result = change(&repo, &config, &output.session, "not-it-at-all", "short").await;
        assert!(matches!(result, Err(AuthError::InvalidCurrentPassword)));
    }

    #[tokio::test]
    async fn test_successful_change_swaps_credentials() {
        let (repo, config) = seeded().await;
        let output = login(&repo, &config, "admin", "admin123").await.unwrap();
        let before = AdminUserRepository::find_by_id(repo.as_ref(), output.identity.id)
            .await
            .unwrap()
            .unwrap();

        change(&repo, &config, &output.session, "admin123", "correct horse battery")
            .await
            .unwrap();

        let after = AdminUserRepository::find_by_id(repo.as_ref(), output.identity.id)
            .await
            .unwrap()
            .unwrap();
        assert_ne!(before.password.salt_hex(), after.password.salt_hex());

        assert!(matches!(
            login(&repo, &config, "admin", "admin123").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(login(&repo, &config, "admin", "correct horse battery").await.is_ok());
    }

    #[tokio::test]
    async fn test_change_revokes_other_sessions_only() {
        let (repo, config) = seeded().await;
        let current = login(&repo, &config, "admin", "admin123").await.unwrap();
        let other = login(&repo, &config, "admin", "admin123").await.unwrap();

        let revoked = change(&repo, &config, &current.session, "admin123", "correct horse battery")
            .await
            .unwrap();

        assert_eq!(revoked, 1);
        assert!(validate(&repo, current.session.id.as_str()).await.is_ok());
        assert!(matches!(
            validate(&repo, other.session.id.as_str()).await,
            Err(AuthError::Unauthenticated)
        ));
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::validation::ValidationErrors;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidCurrentPassword, StatusCode::BAD_REQUEST),
            (AuthError::WeakPassword("too short".into()), StatusCode::BAD_REQUEST),
            (
                AuthError::Validation(ValidationErrors::single("username", "is required")),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::UserInactive, StatusCode::FORBIDDEN),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            assert_eq!(error.kind().status_code(), expected_status.as_u16());
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let app_error = AuthError::Internal("pool exhausted at 10.0.0.5".into()).to_app_error();
        assert_eq!(app_error.message(), "Internal server error");
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use crate::presentation::router::auth_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app() -> Router {
        let (repo, config) = seeded().await;
        auth_router_generic(repo.as_ref().clone(), config.as_ref().clone())
    }

    fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Log in and return the `name=value` pair for the Cookie header
    async fn login_cookie(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/auth/login",
                None,
                json!({ "username": "admin", "password": "admin123" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_overlong_username_is_unauthorized() {
        let app = app().await;
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/auth/login",
                None,
                json!({ "username": "x".repeat(51), "password": "admin123" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_login_sets_session_cookie() {
        let app = app().await;
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/auth/login",
                None,
                json!({ "username": "admin", "password": "admin123" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("adminSessionId="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Strict"));
        assert!(set_cookie.contains("Max-Age=86400"));
        assert!(!set_cookie.contains("Secure"));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["username"], "admin");
        assert!(body["user"].get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn test_login_missing_field_is_bad_request() {
        let response = app()
            .await
            .oneshot(json_request(
                Method::POST,
                "/api/auth/login",
                None,
                json!({ "username": "admin" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["field"], "password");
    }

    #[tokio::test]
    async fn test_login_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let response = app()
            .await
            .oneshot(json_request(
                Method::POST,
                "/api/auth/login",
                None,
                json!({ "username": "admin", "password": "wrong-password" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_me_requires_session() {
        let app = app().await;

        let response = app.clone().oneshot(get("/api/auth/me", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let cookie = login_cookie(&app).await;
        let response = app.oneshot(get("/api/auth/me", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["user"]["username"], "admin");
    }

    #[tokio::test]
    async fn test_logout_clears_cookie_and_session() {
        let app = app().await;
        let cookie = login_cookie(&app).await;

        let logout = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/logout")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(logout).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.contains("Max-Age=0"));
        assert!(body_json(response).await["message"].is_string());

        let response = app.oneshot(get("/api/auth/me", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_without_session_is_ok() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/logout")
            .body(Body::empty())
            .unwrap();
        let response = app().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_change_password_flow() {
        let app = app().await;
        let cookie = login_cookie(&app).await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/api/admin/change-password",
                Some(&cookie),
                json!({ "currentPassword": "wrong-one", "newPassword": "brand-new-pass" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/api/admin/change-password",
                Some(&cookie),
                json!({ "currentPassword": "admin123", "newPassword": "short" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/api/admin/change-password",
                Some(&cookie),
                json!({ "currentPassword": "admin123", "newPassword": "brand-new-pass" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The session that made the change is still good
        let response = app.oneshot(get("/api/auth/me", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_change_password_requires_session() {
        let response = app()
            .await
            .oneshot(json_request(
                Method::PUT,
                "/api/admin/change-password",
                None,
                json!({ "currentPassword": "admin123", "newPassword": "brand-new-pass" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
