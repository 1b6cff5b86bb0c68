//! Password Hashing and Verification
//!
//! Argon2id password handling with:
//! - A random per-password salt stored next to the digest
//! - Zeroization of sensitive data
//! - Constant-time digest comparison
//! - Optional application-wide pepper
//!
//! Parameters follow the OWASP baseline (m=19456 KiB, t=2, p=1) with a
//! 32-byte raw output. Digest and salt are stored hex-encoded in separate
//! columns.

use std::fmt;

use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::{constant_time_eq, random_bytes};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in Unicode scalar values
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in Unicode scalar values
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Digest length in bytes
pub const HASH_LEN: usize = 32;

const ARGON2_M_COST: u32 = 19_456;
const ARGON2_T_COST: u32 = 2;
const ARGON2_P_COST: u32 = 1;

/// Salt used for decoy hashing when there is no stored credential
const DUMMY_SALT: [u8; SALT_LEN] = *b"portfolio-decoy!";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored digest or salt is not valid hex of the expected length
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Input is NFKC-normalized on construction, so the same password typed on
/// different keyboards hashes identically.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new password, enforcing the length policy
    ///
    /// - Not empty/whitespace only
    /// - At least [`MIN_PASSWORD_LENGTH`] characters
    /// - At most [`MAX_PASSWORD_LENGTH`] characters
    /// - No control characters other than space, tab, newline
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::for_verification(raw);
        let normalized = password.0.as_str();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(password)
    }

    /// Normalize without applying the policy
    ///
    /// For checking a submitted password against a stored hash: whatever the
    /// caller typed must still be hashed so the timing profile stays uniform.
    pub fn for_verification(raw: String) -> Self {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    /// Hash with a fresh random salt
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let salt = random_bytes(SALT_LEN);
        let digest = derive(self, &salt, pepper)?;

        Ok(HashedPassword {
            hash: hex::encode(digest.as_slice()),
            salt: hex::encode(&salt),
        })
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(pepper) = pepper {
            bytes.extend_from_slice(pepper);
        }
        bytes
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id digest plus the salt it was computed with (both hex)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
    salt: String,
}

impl HashedPassword {
    /// Rebuild from stored columns
    pub fn from_parts(
        hash: impl Into<String>,
        salt: impl Into<String>,
    ) -> Result<Self, PasswordHashError> {
        let hash = hash.into();
        let salt = salt.into();

        let hash_ok = hex::decode(&hash).is_ok_and(|bytes| bytes.len() == HASH_LEN);
        let salt_ok = hex::decode(&salt).is_ok_and(|bytes| bytes.len() >= 8);
        if !hash_ok || !salt_ok {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash, salt })
    }

    /// Hex digest for storage
    pub fn hash_hex(&self) -> &str {
        &self.hash
    }

    /// Hex salt for storage
    pub fn salt_hex(&self) -> &str {
        &self.salt
    }

    /// Recompute with the stored salt and compare in constant time
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let (Ok(salt), Ok(expected)) = (hex::decode(&self.salt), hex::decode(&self.hash)) else {
            burn_verification(password, pepper);
            return false;
        };

        match derive(password, &salt, pepper) {
            Ok(digest) => constant_time_eq(digest.as_slice(), &expected),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .field("salt", &"[SALT]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Spend the same hashing work as [`HashedPassword::verify`] with no result
///
/// Called when the account is missing or unusable so response latency does
/// not reveal which case occurred.
pub fn burn_verification(password: &ClearTextPassword, pepper: Option<&[u8]>) {
    let _ = derive(password, &DUMMY_SALT, pepper);
}

fn derive(
    password: &ClearTextPassword,
    salt: &[u8],
    pepper: Option<&[u8]>,
) -> Result<Zeroizing<[u8; HASH_LEN]>, PasswordHashError> {
    let params = Params::new(ARGON2_M_COST, ARGON2_T_COST, ARGON2_P_COST, Some(HASH_LEN))
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let input = password.peppered(pepper);
    let mut out = Zeroizing::new([0u8; HASH_LEN]);
    argon2
        .hash_password_into(&input, salt, &mut out[..])
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 8, actual: 5 })
        ));
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("        ".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}defgh".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_length_counts_scalars_after_nfkc() {
        // Eight full-width digits normalize to eight ASCII digits
        let password = ClearTextPassword::new("１２３４５６７８".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();
        let ascii = ClearTextPassword::for_verification("12345678".to_string());
        assert!(hashed.verify(&ascii, None));

        // Seven multi-byte characters are still too short
        let result = ClearTextPassword::new("パスワード安全".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { .. })));
    }

    #[test]
    fn test_default_admin_password_is_accepted() {
        assert!(ClearTextPassword::new("admin123".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::for_verification("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        assert_eq!(hashed.hash_hex().len(), HASH_LEN * 2);
        assert_eq!(hashed.salt_hex().len(), SALT_LEN * 2);
        assert!(hashed.verify(&password, None));

        let wrong = ClearTextPassword::for_verification("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_same_password_gets_fresh_salt() {
        let password = ClearTextPassword::for_verification("TestPassword123!".to_string());
        let first = password.hash(None).unwrap();
        let second = password.hash(None).unwrap();
        assert_ne!(first.salt_hex(), second.salt_hex());
        assert_ne!(first.hash_hex(), second.hash_hex());
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::for_verification("TestPassword123!".to_string());
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_nfkc_equivalent_passwords_verify() {
        let hashed = ClearTextPassword::for_verification("ｐａｓｓｗｏｒｄ".to_string())
            .hash(None)
            .unwrap();
        let ascii = ClearTextPassword::for_verification("password".to_string());
        assert!(hashed.verify(&ascii, None));
    }

    #[test]
    fn test_from_parts_roundtrip() {
        let password = ClearTextPassword::for_verification("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        let restored = HashedPassword::from_parts(hashed.hash_hex(), hashed.salt_hex()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_from_parts_rejects_malformed() {
        assert!(HashedPassword::from_parts("not_hex", "00112233445566778899aabbccddeeff").is_err());
        assert!(HashedPassword::from_parts("abcd", "00112233445566778899aabbccddeeff").is_err());
        assert!(HashedPassword::from_parts("00".repeat(HASH_LEN), "zz").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::for_verification("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash(None).unwrap();
        let debug_output = format!("{:?}", hashed);
        assert!(!debug_output.contains(hashed.hash_hex()));
    }
}
