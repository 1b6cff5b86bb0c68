//! Profile Entity
//!
//! Singleton owner profile. The public projection drops contact details.

use chrono::{DateTime, Utc};
use kernel::id::Id;
use kernel::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_THEME: &str = "dark";

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Id<Profile>,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    /// `{github, linkedin, ...}`
    pub social_links: Option<Value>,
    pub theme_preference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile as served to the public site
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub id: Id<Profile>,
    pub name: String,
    pub title: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub social_links: Option<Value>,
    pub theme_preference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for PublicProfile {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            title: profile.title,
            location: profile.location,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            resume_url: profile.resume_url,
            social_links: profile.social_links,
            theme_preference: profile.theme_preference,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Upsert payload; replaces the whole profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social_links: Option<Value>,
    #[serde(default = "default_theme")]
    pub theme_preference: String,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Validate for ProfileInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("name", &self.name);
        errors.required("title", &self.title);
        errors.required("email", &self.email);
        errors.required("themePreference", &self.theme_preference);
        errors.into_result()
    }
}

impl Profile {
    /// Build the singleton from its first upsert
    pub fn create(id: Id<Profile>, input: ProfileInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            title: input.title,
            email: input.email,
            phone: input.phone,
            location: input.location,
            bio: input.bio,
            avatar_url: input.avatar_url,
            resume_url: input.resume_url,
            social_links: input.social_links,
            theme_preference: input.theme_preference,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite with a later upsert; id and `created_at` survive
    pub fn replace(&mut self, input: ProfileInput, now: DateTime<Utc>) {
        *self = Self {
            id: self.id,
            created_at: self.created_at,
            ..Self::create(self.id, input, now)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProfileInput {
        serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "title": "Engineer",
            "email": "ada@example.com",
            "phone": "+44 20 0000 0000",
        }))
        .unwrap()
    }

    #[test]
    fn test_theme_defaults_to_dark() {
        assert_eq!(input().theme_preference, "dark");
    }

    #[test]
    fn test_public_projection_has_no_contact_details() {
        let profile = Profile::create(Id::new(1), input(), Utc::now());
        let json = serde_json::to_value(PublicProfile::from(profile)).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("phone").is_none());
        assert_eq!(json["name"], "Ada");
    }

    #[test]
    fn test_replace_keeps_identity() {
        let created = Utc::now() - chrono::Duration::days(1);
        let mut profile = Profile::create(Id::new(4), input(), created);
        let mut next = input();
        next.name = "Ada L.".into();
        next.phone = None;

        profile.replace(next, Utc::now());
        assert_eq!(profile.id.get(), 4);
        assert_eq!(profile.created_at, created);
        assert_eq!(profile.name, "Ada L.");
        assert!(profile.phone.is_none());
    }
}
