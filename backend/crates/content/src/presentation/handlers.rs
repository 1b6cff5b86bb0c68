//! HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{Json, Path, Query};
use kernel::id::Id;

use crate::application::{
    ContactInbox, ProfileService, ResourceService, SectionService, SkillCatalogService,
};
use crate::domain::entity::{
    ContactMessage, ContentSection, NewContactMessage, Profile, ProfileInput, PublicProfile,
    SectionInput, SkillWithCategory,
};
use crate::domain::repository::{ContentRepository, ResourceRepository};
use crate::domain::resource::Resource;
use crate::error::ContentResult;
use crate::presentation::dto::ListQuery;

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: ContentRepository,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Generic resources
// ============================================================================

/// GET /api/{resource}
pub async fn list_resources<R, E>(
    State(state): State<ContentAppState<R>>,
    Query(query): Query<ListQuery>,
) -> ContentResult<Json<Vec<E>>>
where
    R: ContentRepository + ResourceRepository<E>,
    E: Resource,
{
    let service = ResourceService::<R, E>::new(state.repo.clone());
    let rows = service.list(query.flag(E::FILTER)).await?;
    Ok(Json(rows))
}

/// GET /api/{resource}/{id}
pub async fn get_resource<R, E>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i32>,
) -> ContentResult<Json<E>>
where
    R: ContentRepository + ResourceRepository<E>,
    E: Resource,
{
    let service = ResourceService::<R, E>::new(state.repo.clone());
    Ok(Json(service.get(Id::new(id)).await?))
}

/// POST /api/{resource}
pub async fn create_resource<R, E>(
    State(state): State<ContentAppState<R>>,
    Json(payload): Json<E::Create>,
) -> ContentResult<Json<E>>
where
    R: ContentRepository + ResourceRepository<E>,
    E: Resource,
{
    let service = ResourceService::<R, E>::new(state.repo.clone());
    Ok(Json(service.create(payload).await?))
}

/// PUT /api/{resource}/{id}
pub async fn update_resource<R, E>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i32>,
    Json(patch): Json<E::Patch>,
) -> ContentResult<Json<E>>
where
    R: ContentRepository + ResourceRepository<E>,
    E: Resource,
{
    let service = ResourceService::<R, E>::new(state.repo.clone());
    Ok(Json(service.update(Id::new(id), patch).await?))
}

/// DELETE /api/{resource}/{id}
pub async fn delete_resource<R, E>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i32>,
) -> ContentResult<StatusCode>
where
    R: ContentRepository + ResourceRepository<E>,
    E: Resource,
{
    let service = ResourceService::<R, E>::new(state.repo.clone());
    service.delete(Id::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Sections
// ============================================================================

/// GET /api/content/{section_key}
pub async fn get_section<R>(
    State(state): State<ContentAppState<R>>,
    Path(key): Path<String>,
) -> ContentResult<Json<ContentSection>>
where
    R: ContentRepository,
{
    let service = SectionService::new(state.repo.clone());
    Ok(Json(service.get(&key).await?))
}

/// PUT /api/content/{section_key}
pub async fn upsert_section<R>(
    State(state): State<ContentAppState<R>>,
    Path(key): Path<String>,
    Json(input): Json<SectionInput>,
) -> ContentResult<Json<ContentSection>>
where
    R: ContentRepository,
{
    let service = SectionService::new(state.repo.clone());
    Ok(Json(service.upsert(&key, input).await?))
}

// ============================================================================
// Skills
// ============================================================================

/// GET /api/skills
pub async fn list_skills<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<SkillWithCategory>>>
where
    R: ContentRepository,
{
    let service = SkillCatalogService::new(state.repo.clone());
    Ok(Json(service.list_with_categories().await?))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/profile
pub async fn get_public_profile<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<PublicProfile>>
where
    R: ContentRepository,
{
    let service = ProfileService::new(state.repo.clone());
    Ok(Json(service.get_public().await?))
}

/// GET /api/profile/private
pub async fn get_private_profile<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Profile>>
where
    R: ContentRepository,
{
    let service = ProfileService::new(state.repo.clone());
    Ok(Json(service.get().await?))
}

/// PUT /api/profile
pub async fn upsert_profile<R>(
    State(state): State<ContentAppState<R>>,
    Json(input): Json<ProfileInput>,
) -> ContentResult<Json<Profile>>
where
    R: ContentRepository,
{
    let service = ProfileService::new(state.repo.clone());
    Ok(Json(service.upsert(input).await?))
}

// ============================================================================
// Contact
// ============================================================================

/// POST /api/contact
pub async fn submit_contact<R>(
    State(state): State<ContentAppState<R>>,
    Json(new): Json<NewContactMessage>,
) -> ContentResult<(StatusCode, Json<ContactMessage>)>
where
    R: ContentRepository,
{
    let inbox = ContactInbox::new(state.repo.clone());
    let message = inbox.submit(new).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/contact/messages
pub async fn list_messages<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<ContactMessage>>>
where
    R: ContentRepository,
{
    let inbox = ContactInbox::new(state.repo.clone());
    Ok(Json(inbox.list().await?))
}

/// PUT /api/contact/messages/{id}/read
pub async fn mark_message_read<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i32>,
) -> ContentResult<StatusCode>
where
    R: ContentRepository,
{
    let inbox = ContactInbox::new(state.repo.clone());
    inbox.mark_read(Id::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/contact/messages/{id}
pub async fn delete_message<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<i32>,
) -> ContentResult<StatusCode>
where
    R: ContentRepository,
{
    let inbox = ContactInbox::new(state.repo.clone());
    inbox.delete(Id::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
