//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; handlers answer with the
//! `kernel::error::AppError` envelope through each crate's error type.

mod config;

use std::sync::Arc;

use auth::application::{BootstrapAdminUseCase, CleanupExpiredSessionsUseCase};
use auth::{AuthMiddlewareState, PgAuthRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use content::{PgContentRepository, content_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "portfolio_api=info,auth=info,content=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_repo = PgAuthRepository::new(pool.clone());

    // Startup cleanup: remove expired admin sessions
    // Errors here should not prevent server startup
    let cleanup = CleanupExpiredSessionsUseCase::new(Arc::new(auth_repo.clone()));
    match cleanup.execute().await {
        Ok(sessions) => {
            tracing::info!(
                sessions_deleted = sessions,
                "Admin session cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Admin session cleanup failed, continuing anyway"
            );
        }
    }

    // Seed the default admin on an empty credential store
    let bootstrap =
        BootstrapAdminUseCase::new(Arc::new(auth_repo.clone()), Arc::new(config.auth.clone()));
    if let Some(admin) = bootstrap.execute().await? {
        tracing::info!(username = %admin.username, "Default admin account seeded");
    }

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::COOKIE,
        ]))
        .allow_credentials(true);

    // Build router
    let gate = AuthMiddlewareState::new(auth_repo.clone(), config.auth.clone());
    let app = Router::new()
        .merge(auth_router(auth_repo, config.auth.clone()))
        .merge(content_router(PgContentRepository::new(pool), gate))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
