//! Skill Entities
//!
//! Skills optionally belong to a category. The public listing returns each
//! skill joined with its category.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use kernel::id::Id;
use kernel::validation::{Validate, ValidationErrors, double_option};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{Resource, by_position, patch_field};

pub const SKILL_LEVEL_MIN: i32 = 1;
pub const SKILL_LEVEL_MAX: i32 = 100;

// ============================================================================
// Category
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: Id<SkillCategory>,
    pub name: String,
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSkillCategory {
    pub name: String,
    pub order: i32,
}

impl Validate for NewSkillCategory {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("name", &self.name);
        errors.non_negative("order", self.order);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryPatch {
    pub name: Option<String>,
    pub order: Option<i32>,
}

impl Validate for SkillCategoryPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            errors.required("name", name);
        }
        if let Some(order) = self.order {
            errors.non_negative("order", order);
        }
        errors.into_result()
    }
}

impl Resource for SkillCategory {
    type Create = NewSkillCategory;
    type Patch = SkillCategoryPatch;

    const NAME: &'static str = "Skill category";

    fn id(&self) -> Id<Self> {
        self.id
    }

    fn build(id: Id<Self>, new: NewSkillCategory, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            order: new.order,
        }
    }

    fn apply(&mut self, patch: SkillCategoryPatch, _now: DateTime<Utc>) {
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.order, patch.order);
    }

    fn listing_cmp(&self, other: &Self) -> Ordering {
        by_position((self.order, self.id), (other.order, other.id))
    }
}

// ============================================================================
// Skill
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Id<Skill>,
    pub category_id: Option<Id<SkillCategory>>,
    pub name: String,
    /// 1..=100
    pub level: i32,
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSkill {
    pub category_id: Option<Id<SkillCategory>>,
    pub name: String,
    pub level: i32,
    pub order: i32,
}

impl Validate for NewSkill {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("name", &self.name);
        errors.in_range("level", self.level, SKILL_LEVEL_MIN..=SKILL_LEVEL_MAX);
        errors.non_negative("order", self.order);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<Id<SkillCategory>>>,
    pub name: Option<String>,
    pub level: Option<i32>,
    pub order: Option<i32>,
}

impl Validate for SkillPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            errors.required("name", name);
        }
        if let Some(level) = self.level {
            errors.in_range("level", level, SKILL_LEVEL_MIN..=SKILL_LEVEL_MAX);
        }
        if let Some(order) = self.order {
            errors.non_negative("order", order);
        }
        errors.into_result()
    }
}

impl Resource for Skill {
    type Create = NewSkill;
    type Patch = SkillPatch;

    const NAME: &'static str = "Skill";

    fn id(&self) -> Id<Self> {
        self.id
    }

    fn build(id: Id<Self>, new: NewSkill, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            category_id: new.category_id,
            name: new.name,
            level: new.level,
            order: new.order,
        }
    }

    fn apply(&mut self, patch: SkillPatch, _now: DateTime<Utc>) {
        patch_field(&mut self.category_id, patch.category_id);
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.level, patch.level);
        patch_field(&mut self.order, patch.order);
    }

    fn listing_cmp(&self, other: &Self) -> Ordering {
        by_position((self.order, self.id), (other.order, other.id))
    }
}

// ============================================================================
// Read model
// ============================================================================

/// Skill joined with its (optional) category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillWithCategory {
    #[serde(flatten)]
    pub skill: Skill,
    pub category: Option<SkillCategory>,
}

impl SkillWithCategory {
    /// Category order first (uncategorized last), then skill order
    pub fn listing_cmp(&self, other: &Self) -> Ordering {
        let category_key = |entry: &Self| {
            entry
                .category
                .as_ref()
                .map(|category| (category.order, category.id))
        };
        match (category_key(self), category_key(other)) {
            (Some(a), Some(b)) => by_position(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.skill.listing_cmp(&other.skill))
    }
}
