//! Blog Post Entity

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use kernel::id::Id;
use kernel::validation::{Validate, ValidationErrors, double_option};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListFilter, Resource, patch_field};

/// Blog post
///
/// `views` is maintained server-side and never read from a payload.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Id<BlogPost>,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
    pub read_time: Option<i32>,
    pub views: i32,
}

/// Create payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub read_time: Option<i32>,
}

impl Validate for NewBlogPost {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("title", &self.title);
        errors.required("slug", &self.slug);
        errors.required("content", &self.content);
        errors.required("category", &self.category);
        if let Some(read_time) = self.read_time {
            errors.non_negative("readTime", read_time);
        }
        errors.into_result()
    }
}

/// Update payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub published_at: Option<Option<DateTime<Utc>>>,
    pub is_published: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub read_time: Option<Option<i32>>,
}

impl Validate for BlogPostPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, value) in [
            ("title", &self.title),
            ("slug", &self.slug),
            ("content", &self.content),
            ("category", &self.category),
        ] {
            if let Some(value) = value {
                errors.required(field, value);
            }
        }
        if let Some(Some(read_time)) = self.read_time {
            errors.non_negative("readTime", read_time);
        }
        errors.into_result()
    }
}

impl Resource for BlogPost {
    type Create = NewBlogPost;
    type Patch = BlogPostPatch;

    const NAME: &'static str = "Blog post";
    const FILTER: ListFilter = ListFilter::Published;

    fn id(&self) -> Id<Self> {
        self.id
    }

    fn prepare(new: &mut NewBlogPost, now: DateTime<Utc>) {
        if new.is_published && new.published_at.is_none() {
            new.published_at = Some(now);
        }
    }

    fn build(id: Id<Self>, new: NewBlogPost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            slug: new.slug,
            excerpt: new.excerpt,
            content: new.content,
            category: new.category,
            tags: new.tags,
            published_at: new.published_at,
            created_at: now,
            updated_at: now,
            is_published: new.is_published,
            read_time: new.read_time,
            views: 0,
        }
    }

    fn apply(&mut self, patch: BlogPostPatch, now: DateTime<Utc>) {
        patch_field(&mut self.title, patch.title);
        patch_field(&mut self.slug, patch.slug);
        patch_field(&mut self.excerpt, patch.excerpt);
        patch_field(&mut self.content, patch.content);
        patch_field(&mut self.category, patch.category);
        patch_field(&mut self.tags, patch.tags);
        patch_field(&mut self.published_at, patch.published_at);
        patch_field(&mut self.is_published, patch.is_published);
        patch_field(&mut self.read_time, patch.read_time);

        if self.is_published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }

    fn matches(&self, flag: bool) -> bool {
        self.is_published == flag
    }

    /// Newest first
    fn listing_cmp(&self, other: &Self) -> Ordering {
        other
            .created_at
            .cmp(&self.created_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> BlogPost {
        let new = NewBlogPost {
            title: "Hello".into(),
            slug: "hello".into(),
            content: "Body".into(),
            category: "notes".into(),
            ..Default::default()
        };
        BlogPost::build(Id::new(1), new, Utc::now())
    }

    #[test]
    fn test_publishing_on_create_stamps_published_at() {
        let now = Utc::now();
        let mut new = NewBlogPost {
            is_published: true,
            ..Default::default()
        };
        BlogPost::prepare(&mut new, now);
        assert_eq!(new.published_at, Some(now));
    }

    #[test]
    fn test_explicit_published_at_is_kept() {
        let explicit = Utc::now() - chrono::Duration::days(3);
        let mut new = NewBlogPost {
            is_published: true,
            published_at: Some(explicit),
            ..Default::default()
        };
        BlogPost::prepare(&mut new, Utc::now());
        assert_eq!(new.published_at, Some(explicit));
    }

    #[test]
    fn test_draft_stays_unpublished() {
        let post = post();
        assert!(!post.is_published);
        assert!(post.published_at.is_none());
        assert_eq!(post.views, 0);
    }

    #[test]
    fn test_publishing_on_update_stamps_published_at() {
        let mut post = post();
        let now = Utc::now();
        post.apply(
            BlogPostPatch {
                is_published: Some(true),
                ..Default::default()
            },
            now,
        );
        assert_eq!(post.published_at, Some(now));
        assert_eq!(post.updated_at, now);
    }

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let patch: BlogPostPatch = serde_json::from_str(r#"{"excerpt":null}"#).unwrap();
        assert_eq!(patch.excerpt, Some(None));
        assert_eq!(patch.tags, None);

        let mut post = post();
        post.excerpt = Some("teaser".into());
        post.tags = Some(vec!["rust".into()]);
        post.apply(patch, Utc::now());
        assert!(post.excerpt.is_none());
        assert_eq!(post.tags, Some(vec!["rust".to_string()]));
    }

    #[test]
    fn test_views_cannot_be_set_by_payload() {
        let new: NewBlogPost = serde_json::from_str(
            r#"{"title":"T","slug":"t","content":"c","category":"x","views":999}"#,
        )
        .unwrap();
        let post = BlogPost::build(Id::new(3), new, Utc::now());
        assert_eq!(post.views, 0);
    }
}
