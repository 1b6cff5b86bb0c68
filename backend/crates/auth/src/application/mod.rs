//! Application Layer
//!
//! Use cases and application services.

pub mod bootstrap;
pub mod change_password;
pub mod config;
pub mod current_admin;
mod hashing;
pub mod login;
pub mod logout;
pub mod validate_session;

// Re-exports
pub use bootstrap::BootstrapAdminUseCase;
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use current_admin::CurrentAdminUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use validate_session::{CleanupExpiredSessionsUseCase, ValidateSessionUseCase};
