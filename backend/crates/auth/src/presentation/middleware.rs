//! Auth Middleware
//!
//! Request gate for protected routes. Every request re-validates its session
//! against the store.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::ValidateSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::AdminSessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AdminSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthMiddlewareState<R>
where
    R: AdminSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// Middleware that requires a valid admin session
///
/// Use with `axum::middleware::from_fn_with_state`. On success the session
/// is available to handlers through [`AuthenticatedSession`].
pub async fn require_admin_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = ValidateSessionUseCase::new(state.repo.clone());
    match use_case.execute(token.as_deref()).await {
        Ok(session) => {
            req.extensions_mut().insert(AuthenticatedSession(session));
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Session placed in request extensions by [`require_admin_session`]
#[derive(Debug, Clone)]
pub struct AuthenticatedSession(pub AdminSession);

impl<S> FromRequestParts<S> for AuthenticatedSession
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedSession>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
