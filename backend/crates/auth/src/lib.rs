//! Auth (Admin Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, request gate
//!
//! ## Features
//! - Admin login with username + password
//! - Server-side sessions referenced by an opaque cookie token
//! - Password change that revokes the admin's other sessions
//! - Default admin bootstrap on an empty credential store
//!
//! ## Security Model
//! - Passwords hashed with Argon2id and a per-admin random salt
//! - Unknown users and wrong passwords cost the same hashing work
//! - Session tokens are 32 CSPRNG bytes; no sliding expiration
//! - Every protected request re-validates its session against the store

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAuthRepository, PgAuthRepository};
pub use presentation::middleware::{AuthMiddlewareState, AuthenticatedSession, require_admin_session};
pub use presentation::router::{auth_router, auth_router_generic};

#[cfg(test)]
mod tests;
