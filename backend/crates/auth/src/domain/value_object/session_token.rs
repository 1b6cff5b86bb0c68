//! Session Token Value Object
//!
//! Opaque session identifier carried in the admin cookie and used as the
//! primary key of `admin_sessions`. 32 bytes from the OS CSPRNG, base64url
//! encoded without padding.

use std::fmt;

use platform::crypto::{from_base64_url, random_token};

/// Entropy per token in bytes
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Encoded length of a token
pub const SESSION_TOKEN_LEN: usize = 43;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Fresh random token
    pub fn generate() -> Self {
        Self(random_token(SESSION_TOKEN_BYTES))
    }

    /// Accept a client-supplied value only if it has the exact token shape
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() != SESSION_TOKEN_LEN {
            return None;
        }
        let decoded = from_base64_url(raw).ok()?;
        (decoded.len() == SESSION_TOKEN_BYTES).then(|| Self(raw.to_string()))
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Enough to correlate log lines, not enough to replay
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "SessionToken({prefix}…)")
    }
}
