//! Project Entity

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use kernel::id::Id;
use kernel::validation::{Validate, ValidationErrors, double_option};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListFilter, Resource, by_position, patch_field};

/// Portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id<Project>,
    pub name: String,
    pub description: String,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub stars: i32,
    pub forks: i32,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub stars: i32,
    pub forks: i32,
    pub language: Option<String>,
    pub order: i32,
}

impl Validate for NewProject {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("name", &self.name);
        errors.required("description", &self.description);
        errors.non_negative("stars", self.stars);
        errors.non_negative("forks", self.forks);
        errors.non_negative("order", self.order);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub technologies: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub github_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub live_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub stars: Option<i32>,
    pub forks: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub language: Option<Option<String>>,
    pub order: Option<i32>,
}

impl Validate for ProjectPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            errors.required("name", name);
        }
        if let Some(description) = &self.description {
            errors.required("description", description);
        }
        for (field, value) in [
            ("stars", self.stars),
            ("forks", self.forks),
            ("order", self.order),
        ] {
            if let Some(value) = value {
                errors.non_negative(field, value);
            }
        }
        errors.into_result()
    }
}

impl Resource for Project {
    type Create = NewProject;
    type Patch = ProjectPatch;

    const NAME: &'static str = "Project";
    const FILTER: ListFilter = ListFilter::Featured;

    fn id(&self) -> Id<Self> {
        self.id
    }

    fn build(id: Id<Self>, new: NewProject, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            technologies: new.technologies,
            github_url: new.github_url,
            live_url: new.live_url,
            image_url: new.image_url,
            featured: new.featured,
            stars: new.stars,
            forks: new.forks,
            language: new.language,
            created_at: now,
            updated_at: now,
            order: new.order,
        }
    }

    fn apply(&mut self, patch: ProjectPatch, now: DateTime<Utc>) {
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.description, patch.description);
        patch_field(&mut self.technologies, patch.technologies);
        patch_field(&mut self.github_url, patch.github_url);
        patch_field(&mut self.live_url, patch.live_url);
        patch_field(&mut self.image_url, patch.image_url);
        patch_field(&mut self.featured, patch.featured);
        patch_field(&mut self.stars, patch.stars);
        patch_field(&mut self.forks, patch.forks);
        patch_field(&mut self.language, patch.language);
        patch_field(&mut self.order, patch.order);
        self.updated_at = now;
    }

    fn matches(&self, flag: bool) -> bool {
        self.featured == flag
    }

    fn listing_cmp(&self, other: &Self) -> Ordering {
        by_position((self.order, self.id), (other.order, other.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_must_not_be_negative() {
        let new = NewProject {
            name: "cms".into(),
            description: "Portfolio CMS".into(),
            stars: -1,
            forks: -2,
            ..Default::default()
        };
        let errors = new.validate().unwrap_err();
        let fields: Vec<_> = errors.errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, ["stars", "forks"]);
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let created = Utc::now() - chrono::Duration::hours(1);
        let mut project = Project::build(
            Id::new(1),
            NewProject {
                name: "cms".into(),
                description: "Portfolio CMS".into(),
                ..Default::default()
            },
            created,
        );

        let now = Utc::now();
        project.apply(
            ProjectPatch {
                featured: Some(true),
                ..Default::default()
            },
            now,
        );

        assert!(project.featured);
        assert_eq!(project.created_at, created);
        assert_eq!(project.updated_at, now);
    }
}
