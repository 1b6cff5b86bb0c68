//! Resource contract
//!
//! Every list/get/create/update/delete entity implements [`Resource`]. The
//! create and patch payloads are associated types so one service and one set
//! of handlers cover all of them.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use kernel::id::Id;
use kernel::validation::Validate;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Which boolean column, if any, the list query filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    /// No filter
    None,
    /// Visible rows only, unless the caller asks for the admin view
    VisibleUnlessAdmin,
    /// Optional `published` flag
    Published,
    /// Optional `featured` flag
    Featured,
}

/// CRUD-able content entity
pub trait Resource: Clone + Serialize + Send + Sync + Sized + 'static {
    /// Full payload accepted on create
    type Create: Validate + DeserializeOwned + Clone + Send + Sync + 'static;
    /// Partial payload accepted on update
    type Patch: Validate + DeserializeOwned + Send + Sync + 'static;

    /// Name used in error messages ("Blog post not found")
    const NAME: &'static str;
    /// List filter semantics
    const FILTER: ListFilter = ListFilter::None;

    fn id(&self) -> Id<Self>;

    /// Fill server-side values into a create payload before it is stored
    fn prepare(_new: &mut Self::Create, _now: DateTime<Utc>) {}

    /// Materialize a stored row from a prepared payload
    fn build(id: Id<Self>, new: Self::Create, now: DateTime<Utc>) -> Self;

    /// Apply a validated patch in place
    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    /// Whether the row passes the list filter for `flag`
    fn matches(&self, _flag: bool) -> bool {
        true
    }

    /// Listing order
    fn listing_cmp(&self, other: &Self) -> Ordering;
}

/// Overwrite `slot` when the patch carries a value.
///
/// For nullable columns `T` is itself an `Option`, so `Some(None)` clears.
pub(crate) fn patch_field<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// `order ASC, id ASC`
pub(crate) fn by_position<T>(a: (i32, Id<T>), b: (i32, Id<T>)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_field() {
        let mut title = "old".to_string();
        patch_field(&mut title, None);
        assert_eq!(title, "old");
        patch_field(&mut title, Some("new".to_string()));
        assert_eq!(title, "new");

        let mut location = Some("Berlin".to_string());
        patch_field(&mut location, Some(None));
        assert!(location.is_none());
    }

    #[test]
    fn test_by_position_breaks_ties_on_id() {
        struct Row;
        let first = (1, Id::<Row>::new(9));
        let second = (1, Id::<Row>::new(10));
        let third = (2, Id::<Row>::new(1));
        assert_eq!(by_position(first, second), Ordering::Less);
        assert_eq!(by_position(third, second), Ordering::Greater);
    }
}
