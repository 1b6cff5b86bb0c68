//! Navigation Item Entity

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use kernel::id::Id;
use kernel::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListFilter, Resource, by_position, patch_field};

/// Site navigation link
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: Id<NavigationItem>,
    pub label: String,
    pub href: String,
    pub icon: String,
    pub order: i32,
    pub is_visible: bool,
}

/// Create payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNavigationItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl Validate for NewNavigationItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("label", &self.label);
        errors.required("href", &self.href);
        errors.required("icon", &self.icon);
        errors.non_negative("order", self.order);
        errors.into_result()
    }
}

/// Update payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItemPatch {
    pub label: Option<String>,
    pub href: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
    pub is_visible: Option<bool>,
}

impl Validate for NavigationItemPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(label) = &self.label {
            errors.required("label", label);
        }
        if let Some(href) = &self.href {
            errors.required("href", href);
        }
        if let Some(icon) = &self.icon {
            errors.required("icon", icon);
        }
        if let Some(order) = self.order {
            errors.non_negative("order", order);
        }
        errors.into_result()
    }
}

impl Resource for NavigationItem {
    type Create = NewNavigationItem;
    type Patch = NavigationItemPatch;

    const NAME: &'static str = "Navigation item";
    const FILTER: ListFilter = ListFilter::VisibleUnlessAdmin;

    fn id(&self) -> Id<Self> {
        self.id
    }

    fn build(id: Id<Self>, new: NewNavigationItem, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            label: new.label,
            href: new.href,
            icon: new.icon,
            order: new.order,
            is_visible: new.is_visible,
        }
    }

    fn apply(&mut self, patch: NavigationItemPatch, _now: DateTime<Utc>) {
        patch_field(&mut self.label, patch.label);
        patch_field(&mut self.href, patch.href);
        patch_field(&mut self.icon, patch.icon);
        patch_field(&mut self.order, patch.order);
        patch_field(&mut self.is_visible, patch.is_visible);
    }

    fn matches(&self, flag: bool) -> bool {
        self.is_visible == flag
    }

    fn listing_cmp(&self, other: &Self) -> Ordering {
        by_position((self.order, self.id), (other.order, other.id))
    }
}
