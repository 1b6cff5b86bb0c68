//! Content Router

use std::sync::Arc;

use auth::domain::repository::AdminSessionRepository;
use auth::{AuthMiddlewareState, require_admin_session};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::domain::entity::{
    BlogPost, Education, Experience, NavigationItem, Project, Skill, SkillCategory,
};
use crate::domain::repository::ContentRepository;
use crate::infra::postgres::PgContentRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// Create the Content router with PostgreSQL repository
pub fn content_router<A>(repo: PgContentRepository, gate: AuthMiddlewareState<A>) -> Router
where
    A: AdminSessionRepository + Clone + Send + Sync + 'static,
{
    content_router_generic(repo, gate)
}

/// Create a generic Content router for any repository implementation
///
/// Reads are public; every write and the private reads go through the
/// admin session gate. Paths are absolute, so the result is merged.
pub fn content_router_generic<R, A>(repo: R, gate: AuthMiddlewareState<A>) -> Router
where
    R: ContentRepository,
    A: AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route(
            "/api/navigation",
            get(handlers::list_resources::<R, NavigationItem>),
        )
        .route("/api/content/{section_key}", get(handlers::get_section::<R>))
        .route("/api/blog", get(handlers::list_resources::<R, BlogPost>))
        .route("/api/blog/{id}", get(handlers::get_resource::<R, BlogPost>))
        .route(
            "/api/experience",
            get(handlers::list_resources::<R, Experience>),
        )
        .route(
            "/api/education",
            get(handlers::list_resources::<R, Education>),
        )
        .route("/api/skills", get(handlers::list_skills::<R>))
        .route("/api/projects", get(handlers::list_resources::<R, Project>))
        .route("/api/profile", get(handlers::get_public_profile::<R>))
        .route("/api/contact", post(handlers::submit_contact::<R>));

    let protected = Router::new()
        .route(
            "/api/navigation",
            post(handlers::create_resource::<R, NavigationItem>),
        )
        .route(
            "/api/navigation/{id}",
            put(handlers::update_resource::<R, NavigationItem>)
                .delete(handlers::delete_resource::<R, NavigationItem>),
        )
        .route(
            "/api/content/{section_key}",
            put(handlers::upsert_section::<R>),
        )
        .route("/api/blog", post(handlers::create_resource::<R, BlogPost>))
        .route(
            "/api/blog/{id}",
            put(handlers::update_resource::<R, BlogPost>)
                .delete(handlers::delete_resource::<R, BlogPost>),
        )
        .route(
            "/api/experience",
            post(handlers::create_resource::<R, Experience>),
        )
        .route(
            "/api/experience/{id}",
            put(handlers::update_resource::<R, Experience>)
                .delete(handlers::delete_resource::<R, Experience>),
        )
        .route(
            "/api/education",
            post(handlers::create_resource::<R, Education>),
        )
        .route(
            "/api/education/{id}",
            put(handlers::update_resource::<R, Education>)
                .delete(handlers::delete_resource::<R, Education>),
        )
        .route(
            "/api/skills/categories",
            post(handlers::create_resource::<R, SkillCategory>),
        )
        .route(
            "/api/skills/categories/{id}",
            put(handlers::update_resource::<R, SkillCategory>)
                .delete(handlers::delete_resource::<R, SkillCategory>),
        )
        .route("/api/skills", post(handlers::create_resource::<R, Skill>))
        .route(
            "/api/skills/{id}",
            put(handlers::update_resource::<R, Skill>)
                .delete(handlers::delete_resource::<R, Skill>),
        )
        .route("/api/projects", post(handlers::create_resource::<R, Project>))
        .route(
            "/api/projects/{id}",
            put(handlers::update_resource::<R, Project>)
                .delete(handlers::delete_resource::<R, Project>),
        )
        .route("/api/profile", put(handlers::upsert_profile::<R>))
        .route(
            "/api/profile/private",
            get(handlers::get_private_profile::<R>),
        )
        .route("/api/contact/messages", get(handlers::list_messages::<R>))
        .route(
            "/api/contact/messages/{id}",
            axum::routing::delete(handlers::delete_message::<R>),
        )
        .route(
            "/api/contact/messages/{id}/read",
            put(handlers::mark_message_read::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            gate,
            require_admin_session::<A>,
        ));

    // Public handlers merge last so unmatched methods answer 405 without the gate
    protected.merge(public).with_state(state)
}
