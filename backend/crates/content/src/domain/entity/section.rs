//! Content Section Entity
//!
//! Keyed page blocks (`hero`, `about`, ...). Written by upsert only.

use chrono::{DateTime, Utc};
use kernel::id::Id;
use kernel::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SECTION_KEY_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: Id<ContentSection>,
    pub section_key: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    /// Free-form JSON (images, links, ...)
    pub metadata: Option<Value>,
    pub updated_at: DateTime<Utc>,
}

/// Upsert payload; replaces every field of the section.
///
/// A `sectionKey` in the body is ignored, the path decides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub metadata: Option<Value>,
}

/// Check a section key taken from the path
pub fn validate_section_key(key: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.required("sectionKey", key);
    errors.max_chars("sectionKey", key, SECTION_KEY_MAX_LENGTH);
    errors.into_result()
}

impl ContentSection {
    /// Overwrite the section with an upsert payload
    pub fn replace(&mut self, input: SectionInput, now: DateTime<Utc>) {
        self.title = input.title;
        self.subtitle = input.subtitle;
        self.content = input.content;
        self.metadata = input.metadata;
        self.updated_at = now;
    }
}
