//! Application Layer
//!
//! Services the HTTP handlers call into.

pub mod contact;
pub mod profile;
pub mod resource_service;
pub mod sections;
pub mod skills;

// Re-exports
pub use contact::ContactInbox;
pub use profile::ProfileService;
pub use resource_service::ResourceService;
pub use sections::SectionService;
pub use skills::SkillCatalogService;
