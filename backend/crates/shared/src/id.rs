//! Common ID Types
//!
//! Type-safe wrappers around the serial (`SERIAL` / `i32`) primary keys used
//! by every table. The marker is usually the entity type itself, so an
//! `Id<BlogPost>` cannot be passed where an `Id<Project>` is expected.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::Id;
/// struct Project;
/// type ProjectId = Id<Project>;
///
/// let id = ProjectId::new(7);
/// assert_eq!(id.get(), 7);
/// ```
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a raw database key
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the raw key
    pub const fn get(&self) -> i32 {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::new)
    }
}

// ============================================================================
// SQLx integration (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
mod sqlx_impls {
    use super::Id;
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
    use sqlx::{Decode, Encode, Postgres, Type};

    impl<T> Type<Postgres> for Id<T> {
        fn type_info() -> PgTypeInfo {
            <i32 as Type<Postgres>>::type_info()
        }
    }

    impl<'r, T> Decode<'r, Postgres> for Id<T> {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            <i32 as Decode<'r, Postgres>>::decode(value).map(Id::new)
        }
    }

    impl<T> Encode<'_, Postgres> for Id<T> {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
            <i32 as Encode<'_, Postgres>>::encode_by_ref(&self.get(), buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Post;
    struct Project;

    #[test]
    fn test_id_type_safety() {
        let post_id: Id<Post> = Id::new(1);
        let project_id: Id<Project> = Id::new(1);

        // Same raw value, different types; only raw values compare.
        assert_eq!(post_id.get(), project_id.get());
    }

    #[test]
    fn test_id_is_copy_without_marker_bounds() {
        let id: Id<Post> = Id::new(42);
        let copy = id;
        assert_eq!(id, copy);
        assert_eq!(i32::from(copy), 42);
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let id: Id<Post> = Id::new(12);
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");

        let parsed: Id<Post> = serde_json::from_str("5").unwrap();
        assert_eq!(parsed.get(), 5);

        let nullable: Option<Id<Post>> = serde_json::from_str("null").unwrap();
        assert!(nullable.is_none());
    }
}
