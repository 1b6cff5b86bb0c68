//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (CSPRNG tokens, constant-time comparison)
//! - Password hashing (Argon2id with a stored per-user salt)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
