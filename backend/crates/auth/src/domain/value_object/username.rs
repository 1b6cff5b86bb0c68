//! Admin Username Value Object
//!
//! The login handle of an admin account.
//!
//! ## Invariants
//! - NFKC normalized, surrounding whitespace trimmed
//! - 1 to [`USERNAME_MAX_LENGTH`] characters
//! - No control characters
//!
//! Comparison is exact (case-sensitive) on the normalized form.

use derive_more::Display;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for usernames (in characters), matches `VARCHAR(50)`
pub const USERNAME_MAX_LENGTH: usize = 50;

/// Error returned when username validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("Username contains invalid control characters")]
    InvalidCharacter,
}

/// Validated, normalized admin username
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{value}")]
pub struct Username {
    value: String,
}

impl Username {
    /// Normalize (NFKC, trim) and validate raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, UsernameError> {
        let value = input.as_ref().nfkc().collect::<String>().trim().to_string();

        if value.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = value.chars().count();
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                length,
                max: USERNAME_MAX_LENGTH,
            });
        }

        if value.chars().any(char::is_control) {
            return Err(UsernameError::InvalidCharacter);
        }

        Ok(Self { value })
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_whitespace() {
        let name = Username::new("  admin  ").unwrap();
        assert_eq!(name.as_str(), "admin");
    }

    #[test]
    fn test_case_is_preserved() {
        let name = Username::new("Admin").unwrap();
        assert_eq!(name.as_str(), "Admin");
        assert_ne!(name, Username::new("admin").unwrap());
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width letters become ASCII
        let name = Username::new("ａｄｍｉｎ").unwrap();
        assert_eq!(name.as_str(), "admin");
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(Username::new(""), Err(UsernameError::Empty));
        assert_eq!(Username::new("   "), Err(UsernameError::Empty));
    }

    #[test]
    fn test_length_limit() {
        assert!(Username::new("a".repeat(USERNAME_MAX_LENGTH)).is_ok());
        assert!(matches!(
            Username::new("a".repeat(USERNAME_MAX_LENGTH + 1)),
            Err(UsernameError::TooLong { length: 51, max: 50 })
        ));
    }

    #[test]
    fn test_control_characters_rejected() {
        assert_eq!(
            Username::new("ad\u{0000}min"),
            Err(UsernameError::InvalidCharacter)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Username::new("root").unwrap().to_string(), "root");
    }
}
