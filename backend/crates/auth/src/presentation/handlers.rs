//! HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use kernel::extract::Json;
use kernel::validation::Validate;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, CurrentAdminUseCase, LoginInput, LoginUseCase,
    LogoutUseCase,
};
use crate::domain::repository::{AdminSessionRepository, AdminUserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    ChangePasswordRequest, LoginRequest, LoginResponse, MeResponse, MessageResponse,
};
use crate::presentation::middleware::AuthenticatedSession;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AdminUserRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login / Logout
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AdminUserRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    req.validate()?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(output.session.id.as_str());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            user: output.identity,
        }),
    ))
}

/// POST /api/auth/logout
///
/// Always clears the cookie; an unknown or missing session is not an error.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: AdminUserRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = LogoutUseCase::new(state.repo.clone());
    use_case.execute(token.as_deref()).await?;

    let cookie = state.config.session_cookie().build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new("Logged out successfully")),
    ))
}

// ============================================================================
// Authenticated
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    AuthenticatedSession(session): AuthenticatedSession,
) -> AuthResult<Json<MeResponse>>
where
    R: AdminUserRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurrentAdminUseCase::new(state.repo.clone());
    let user = use_case.execute(&session).await?;

    Ok(Json(MeResponse { user }))
}

/// PUT /api/admin/change-password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    AuthenticatedSession(session): AuthenticatedSession,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AdminUserRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    req.validate()?;

    let use_case =
        ChangePasswordUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    use_case
        .execute(
            &session,
            ChangePasswordInput {
                current_password: req.current_password,
                new_password: req.new_password,
            },
        )
        .await?;

    Ok(Json(MessageResponse::new("Password changed successfully")))
}
