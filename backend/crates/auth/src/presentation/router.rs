//! Auth Router

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::{AdminSessionRepository, AdminUserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_admin_session};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// Paths are absolute, so the result is merged rather than nested.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: AdminUserRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };
    let gate = AuthMiddlewareState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    let protected = Router::new()
        .route("/api/auth/me", get(handlers::me::<R>))
        .route(
            "/api/admin/change-password",
            put(handlers::change_password::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            gate,
            require_admin_session::<R>,
        ));

    Router::new()
        .route("/api/auth/login", post(handlers::login::<R>))
        .route("/api/auth/logout", post(handlers::logout::<R>))
        .merge(protected)
        .with_state(state)
}
