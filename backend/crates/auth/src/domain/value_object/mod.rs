//! Value Object Module

pub mod admin_user_id;
pub mod session_token;
pub mod username;
