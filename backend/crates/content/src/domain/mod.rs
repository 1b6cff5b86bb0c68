//! Domain Layer
//!
//! Content entities, their payloads and validation, and repository traits.

pub mod entity;
pub mod repository;
pub mod resource;

pub use repository::{
    ContactRepository, ContentRepository, ProfileRepository, ResourceRepository,
    SectionRepository, SkillCatalogRepository,
};
pub use resource::{ListFilter, Resource};
