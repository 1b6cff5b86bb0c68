//! Repository Traits
//!
//! Interfaces for content persistence. Implementations live in the
//! infrastructure layer (PostgreSQL and in-memory).

use kernel::id::Id;

use crate::domain::entity::{
    BlogPost, ContactMessage, ContentSection, Education, Experience, NavigationItem,
    NewContactMessage, Profile, ProfileInput, Project, SectionInput, Skill, SkillCategory,
    SkillWithCategory,
};
use crate::domain::resource::Resource;
use crate::error::ContentResult;

/// Per-resource CRUD store
#[trait_variant::make(ResourceRepository: Send)]
pub trait LocalResourceRepository<E: Resource> {
    /// Rows passing the optional flag filter, in listing order
    async fn list(&self, flag: Option<bool>) -> ContentResult<Vec<E>>;

    async fn find(&self, id: Id<E>) -> ContentResult<Option<E>>;

    /// Insert a prepared payload, returning the stored row
    async fn insert(&self, new: &E::Create) -> ContentResult<E>;

    /// Overwrite every column of an existing row; `None` if it vanished
    async fn update(&self, row: &E) -> ContentResult<Option<E>>;

    /// `true` if a row was removed
    async fn delete(&self, id: Id<E>) -> ContentResult<bool>;
}

/// Keyed content sections
#[trait_variant::make(SectionRepository: Send)]
pub trait LocalSectionRepository {
    async fn find_section(&self, key: &str) -> ContentResult<Option<ContentSection>>;

    /// Insert or replace the section stored under `key`
    async fn upsert_section(&self, key: &str, input: &SectionInput)
    -> ContentResult<ContentSection>;
}

/// Singleton profile
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    async fn find_profile(&self) -> ContentResult<Option<Profile>>;

    /// Insert the profile or replace the existing one
    async fn upsert_profile(&self, input: &ProfileInput) -> ContentResult<Profile>;
}

/// Skills read model
#[trait_variant::make(SkillCatalogRepository: Send)]
pub trait LocalSkillCatalogRepository {
    /// Every skill with its category, category order first
    async fn list_skills_with_categories(&self) -> ContentResult<Vec<SkillWithCategory>>;
}

/// Contact form inbox
#[trait_variant::make(ContactRepository: Send)]
pub trait LocalContactRepository {
    async fn submit_message(&self, new: &NewContactMessage) -> ContentResult<ContactMessage>;

    /// Newest first
    async fn list_messages(&self) -> ContentResult<Vec<ContactMessage>>;

    /// `true` if the message exists
    async fn mark_message_read(&self, id: Id<ContactMessage>) -> ContentResult<bool>;

    /// `true` if a message was removed
    async fn delete_message(&self, id: Id<ContactMessage>) -> ContentResult<bool>;
}

/// Everything the content routes need from one store
pub trait ContentRepository:
    ResourceRepository<NavigationItem>
    + ResourceRepository<BlogPost>
    + ResourceRepository<Experience>
    + ResourceRepository<Education>
    + ResourceRepository<SkillCategory>
    + ResourceRepository<Skill>
    + ResourceRepository<Project>
    + SectionRepository
    + ProfileRepository
    + SkillCatalogRepository
    + ContactRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> ContentRepository for T where
    T: ResourceRepository<NavigationItem>
        + ResourceRepository<BlogPost>
        + ResourceRepository<Experience>
        + ResourceRepository<Education>
        + ResourceRepository<SkillCategory>
        + ResourceRepository<Skill>
        + ResourceRepository<Project>
        + SectionRepository
        + ProfileRepository
        + SkillCatalogRepository
        + ContactRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
