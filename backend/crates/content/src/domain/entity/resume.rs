//! Résumé Entities: experience and education entries

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use kernel::id::Id;
use kernel::validation::{Validate, ValidationErrors, double_option};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{Resource, by_position, patch_field};

// ============================================================================
// Experience
// ============================================================================

/// Work experience entry; `end_date` is `None` for the current position
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Id<Experience>,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// `YYYY-MM`
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub order: i32,
}

impl Validate for NewExperience {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("title", &self.title);
        errors.required("company", &self.company);
        errors.required("startDate", &self.start_date);
        errors.non_negative("order", self.order);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub achievements: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub technologies: Option<Option<Vec<String>>>,
    pub order: Option<i32>,
}

impl Validate for ExperiencePatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, value) in [
            ("title", &self.title),
            ("company", &self.company),
            ("startDate", &self.start_date),
        ] {
            if let Some(value) = value {
                errors.required(field, value);
            }
        }
        if let Some(order) = self.order {
            errors.non_negative("order", order);
        }
        errors.into_result()
    }
}

impl Resource for Experience {
    type Create = NewExperience;
    type Patch = ExperiencePatch;

    const NAME: &'static str = "Experience";

    fn id(&self) -> Id<Self> {
        self.id
    }

    fn build(id: Id<Self>, new: NewExperience, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            company: new.company,
            location: new.location,
            start_date: new.start_date,
            end_date: new.end_date,
            description: new.description,
            achievements: new.achievements,
            technologies: new.technologies,
            order: new.order,
        }
    }

    fn apply(&mut self, patch: ExperiencePatch, _now: DateTime<Utc>) {
        patch_field(&mut self.title, patch.title);
        patch_field(&mut self.company, patch.company);
        patch_field(&mut self.location, patch.location);
        patch_field(&mut self.start_date, patch.start_date);
        patch_field(&mut self.end_date, patch.end_date);
        patch_field(&mut self.description, patch.description);
        patch_field(&mut self.achievements, patch.achievements);
        patch_field(&mut self.technologies, patch.technologies);
        patch_field(&mut self.order, patch.order);
    }

    fn listing_cmp(&self, other: &Self) -> Ordering {
        by_position((self.order, self.id), (other.order, other.id))
    }
}

// ============================================================================
// Education
// ============================================================================

/// Education entry
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Id<Education>,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start_year: String,
    pub end_year: Option<String>,
    pub description: Option<String>,
    pub gpa: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEducation {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start_year: String,
    pub end_year: Option<String>,
    pub description: Option<String>,
    pub gpa: Option<String>,
    pub order: i32,
}

impl Validate for NewEducation {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("degree", &self.degree);
        errors.required("institution", &self.institution);
        errors.required("startYear", &self.start_year);
        errors.non_negative("order", self.order);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    pub start_year: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub gpa: Option<Option<String>>,
    pub order: Option<i32>,
}

impl Validate for EducationPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, value) in [
            ("degree", &self.degree),
            ("institution", &self.institution),
            ("startYear", &self.start_year),
        ] {
            if let Some(value) = value {
                errors.required(field, value);
            }
        }
        if let Some(order) = self.order {
            errors.non_negative("order", order);
        }
        errors.into_result()
    }
}

impl Resource for Education {
    type Create = NewEducation;
    type Patch = EducationPatch;

    const NAME: &'static str = "Education";

    fn id(&self) -> Id<Self> {
        self.id
    }

    fn build(id: Id<Self>, new: NewEducation, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            degree: new.degree,
            institution: new.institution,
            location: new.location,
            start_year: new.start_year,
            end_year: new.end_year,
            description: new.description,
            gpa: new.gpa,
            order: new.order,
        }
    }

    fn apply(&mut self, patch: EducationPatch, _now: DateTime<Utc>) {
        patch_field(&mut self.degree, patch.degree);
        patch_field(&mut self.institution, patch.institution);
        patch_field(&mut self.location, patch.location);
        patch_field(&mut self.start_year, patch.start_year);
        patch_field(&mut self.end_year, patch.end_year);
        patch_field(&mut self.description, patch.description);
        patch_field(&mut self.gpa, patch.gpa);
        patch_field(&mut self.order, patch.order);
    }

    fn listing_cmp(&self, other: &Self) -> Ordering {
        by_position((self.order, self.id), (other.order, other.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_position_has_no_end_date() {
        let new: NewExperience = serde_json::from_str(
            r#"{"title":"Engineer","company":"Acme","startDate":"2021-04"}"#,
        )
        .unwrap();
        assert!(new.validate().is_ok());
        let experience = Experience::build(Id::new(1), new, Utc::now());
        assert!(experience.end_date.is_none());
        assert_eq!(experience.order, 0);
    }

    #[test]
    fn test_ending_a_position() {
        let new = NewExperience {
            title: "Engineer".into(),
            company: "Acme".into(),
            start_date: "2021-04".into(),
            ..Default::default()
        };
        let mut experience = Experience::build(Id::new(1), new, Utc::now());
        let patch: ExperiencePatch = serde_json::from_str(r#"{"endDate":"2024-01"}"#).unwrap();
        experience.apply(patch, Utc::now());
        assert_eq!(experience.end_date.as_deref(), Some("2024-01"));
        assert_eq!(experience.title, "Engineer");
    }

    #[test]
    fn test_education_requires_degree_and_institution() {
        let errors = NewEducation::default().validate().unwrap_err();
        let fields: Vec<_> = errors.errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, ["degree", "institution", "startYear"]);
    }
}
