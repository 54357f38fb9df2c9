//! Catalog items (e.g., "Brick Walls", "Gable Roof").

use crate::models::CategoryType;
use serde::{Deserialize, Serialize};

/// A single building component entry.
///
/// `related_item_ids` is authored by hand: it is not guaranteed to be
/// symmetric and may name ids that do not exist in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (e.g., "brick_wall")
    pub id: String,
    /// Display name (e.g., "Brick Walls")
    pub name: String,
    /// Owning category
    pub category: CategoryType,
    /// One-line description
    pub short_description: String,
    /// Optional thumbnail reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether this is a commonly used item
    #[serde(default, rename = "popular")]
    pub is_popular: bool,
    /// Ids of related items
    #[serde(default)]
    pub related_item_ids: Vec<String>,
}

impl Item {
    /// Checks whether this item matches a search query.
    ///
    /// Case-insensitive substring match against the name, the short
    /// description, and every tag. An empty query matches everything.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.matches_lowercase(&query)
    }

    /// Same as [`Item::matches_search`] for a query that is already lowercased.
    pub(crate) fn matches_lowercase(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.short_description.to_lowercase().contains(query_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query_lower))
    }

    /// Display name of the owning category.
    #[must_use]
    pub const fn category_name(&self) -> &'static str {
        self.category.display_name()
    }
}
