//! Content (Portfolio CMS) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities with their payloads, the `Resource` contract, repository traits
//! - `application/` - Resource, section, profile, skill catalog and contact services
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers and router
//!
//! Public routes serve published/visible content. Writes and private reads
//! sit behind the admin session gate from the `auth` crate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ContentError, ContentResult};
pub use infra::{InMemoryContentRepository, PgContentRepository};
pub use presentation::router::{content_router, content_router_generic};
