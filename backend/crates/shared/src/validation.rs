//! Field-level validation
//!
//! Payload types implement [`Validate`] and report every failing field at
//! once through [`ValidationErrors`]. Rules are plain methods so each payload
//! reads as a checklist:
//!
//! ```rust
//! use kernel::validation::{Validate, ValidationErrors};
//!
//! struct NewCategory {
//!     name: String,
//!     order: i32,
//! }
//!
//! impl Validate for NewCategory {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::new();
//!         errors.required("name", &self.name);
//!         errors.non_negative("order", self.order);
//!         errors.into_result()
//!     }
//! }
//!
//! let bad = NewCategory { name: " ".into(), order: -1 };
//! assert_eq!(bad.validate().unwrap_err().len(), 2);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Deserializer, Serialize};

/// A single failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    field: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl FieldError {
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Accumulated field errors for one payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a single failure
    pub fn single(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    // ========================================================================
    // Rules
    // ========================================================================

    /// Non-empty after trimming
    pub fn required(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "is required");
        }
    }

    /// At most `max` characters
    pub fn max_chars(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("must be at most {max} characters"));
        }
    }

    pub fn non_negative(&mut self, field: &'static str, value: i32) {
        if value < 0 {
            self.add(field, "must not be negative");
        }
    }

    pub fn in_range(&mut self, field: &'static str, value: i32, range: RangeInclusive<i32>) {
        if !range.contains(&value) {
            self.add(
                field,
                format!("must be between {} and {}", range.start(), range.end()),
            );
        }
    }

    /// Loose `local@domain.tld` shape check
    pub fn email(&mut self, field: &'static str, value: &str) {
        let valid = value.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        });
        if !valid {
            self.add(field, "must be a valid email address");
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Implemented by every request payload
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

// ============================================================================
// Patch helper
// ============================================================================

/// Deserialize a nullable field of a partial update.
///
/// Use with `#[serde(default, deserialize_with = "kernel::validation::double_option")]`
/// on an `Option<Option<T>>` field:
/// - key absent  -> `None` (leave unchanged)
/// - `null`      -> `Some(None)` (clear)
/// - value       -> `Some(Some(v))` (set)
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let mut errors = ValidationErrors::new();
        errors.required("title", "   ");
        errors.required("slug", "hello-world");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field(), "title");
    }

    #[test]
    fn test_max_chars_counts_characters() {
        let mut errors = ValidationErrors::new();
        errors.max_chars("name", "äöü", 3);
        assert!(errors.is_empty());
        errors.max_chars("name", "äöüß", 3);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_in_range() {
        let mut errors = ValidationErrors::new();
        errors.in_range("level", 1, 1..=100);
        errors.in_range("level", 100, 1..=100);
        assert!(errors.is_empty());
        errors.in_range("level", 0, 1..=100);
        errors.in_range("level", 101, 1..=100);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_email_shape() {
        for ok in ["a@b.com", "first.last@example.co.uk"] {
            let mut errors = ValidationErrors::new();
            errors.email("email", ok);
            assert!(errors.is_empty(), "{ok} should pass");
        }
        for bad in ["", "plain", "@b.com", "a@b", "a@@b.com", "a@.com", "a@b."] {
            let mut errors = ValidationErrors::new();
            errors.email("email", bad);
            assert_eq!(errors.len(), 1, "{bad} should fail");
        }
    }

    #[test]
    fn test_into_result_and_display() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let err = ValidationErrors::single("label", "is required")
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "label is required");
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        subtitle: Option<Option<String>>,
    }

    #[test]
    fn test_double_option_distinguishes_absent_from_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.subtitle, None);

        let cleared: Patch = serde_json::from_str(r#"{"subtitle":null}"#).unwrap();
        assert_eq!(cleared.subtitle, Some(None));

        let set: Patch = serde_json::from_str(r#"{"subtitle":"hi"}"#).unwrap();
        assert_eq!(set.subtitle, Some(Some("hi".to_string())));
    }
}
