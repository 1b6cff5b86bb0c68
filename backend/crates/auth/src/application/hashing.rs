//! Off-runtime password hashing
//!
//! Argon2id is deliberately slow, so every hash runs on the blocking pool.

use platform::password::{ClearTextPassword, HashedPassword, burn_verification};

use crate::error::{AuthError, AuthResult};

/// Verify `password` against `stored`.
///
/// With no stored credential the same work is done against a dummy salt
/// and the result is `false`.
pub(crate) async fn verify_password(
    stored: Option<HashedPassword>,
    password: ClearTextPassword,
    pepper: Option<Vec<u8>>,
) -> AuthResult<bool> {
    tokio::task::spawn_blocking(move || match stored {
        Some(hash) => hash.verify(&password, pepper.as_deref()),
        None => {
            burn_verification(&password, pepper.as_deref());
            false
        }
    })
    .await
    .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))
}

/// Hash `password` with a fresh salt
pub(crate) async fn hash_password(
    password: ClearTextPassword,
    pepper: Option<Vec<u8>>,
) -> AuthResult<HashedPassword> {
    tokio::task::spawn_blocking(move || password.hash(pepper.as_deref()))
        .await
        .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AuthError::Internal(e.to_string()))
}
