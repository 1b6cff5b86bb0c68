//! Query parameters

use serde::Deserialize;

use crate::domain::resource::ListFilter;

/// Query string accepted by every list route; each entity reads its own flag
///
/// Flags are raw strings: only `true` switches one on, any other value
/// reads as false.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub admin: Option<String>,
    pub published: Option<String>,
    pub featured: Option<String>,
}

fn is_true(value: &str) -> bool {
    value == "true"
}

impl ListQuery {
    /// Resolve the repository flag for an entity's filter
    pub fn flag(&self, filter: ListFilter) -> Option<bool> {
        match filter {
            ListFilter::None => None,
            ListFilter::VisibleUnlessAdmin => {
                if self.admin.as_deref().is_some_and(is_true) {
                    None
                } else {
                    Some(true)
                }
            }
            ListFilter::Published => self.published.as_deref().map(is_true),
            ListFilter::Featured => self.featured.as_deref().map(is_true),
        }
    }
}
