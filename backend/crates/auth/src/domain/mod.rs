//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    admin_session::AdminSession,
    admin_user::{AdminIdentity, AdminUser, NewAdminUser},
};
pub use repository::{AdminSessionRepository, AdminUserRepository};
