//! Building component catalog and query layer.
//!
//! This module provides access to the embedded catalog of categories, items,
//! and item details, together with the pure lookup and search functions the
//! repository builds on.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::models::{Category, CategoryType, Item, ItemDetail};

/// Catalog schema from catalog.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    version: String,
    categories: Vec<Category>,
    items: Vec<Item>,
    #[serde(default)]
    details: Vec<ItemDetail>,
}

/// Immutable table of categories, items, and sparse item details.
///
/// The shipped catalog is embedded in the binary at compile time. Lookups
/// by item id are linear scans in catalog order; details are indexed by
/// item id since most items have none.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Schema version of the source file
    version: String,
    /// Category records in display order
    categories: Vec<Category>,
    /// All items in catalog insertion order
    items: Vec<Item>,
    /// Detail records in authored order
    details: Vec<ItemDetail>,
    /// Detail lookup by item id
    detail_index: HashMap<String, usize>,
}

/// A data-integrity problem found in the catalog.
///
/// None of these prevent the catalog from loading; queries tolerate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// An item lists a related id that is not in the catalog.
    DanglingRelatedId {
        /// Item declaring the relation
        item_id: String,
        /// Id that resolves to nothing
        missing_id: String,
    },
    /// A detail record is keyed by an id that is not in the catalog.
    OrphanDetail {
        /// Key of the orphaned detail
        item_id: String,
    },
    /// A category's advertised item count differs from its actual items.
    ItemCountMismatch {
        /// Category id
        category_id: String,
        /// Count stored on the category record
        declared: usize,
        /// Number of items in the catalog with that category
        actual: usize,
    },
    /// Items reference a category type that has no category record.
    MissingCategory {
        /// Category type id without a record
        category: String,
    },
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingRelatedId {
                item_id,
                missing_id,
            } => write!(f, "item '{item_id}' relates to unknown item '{missing_id}'"),
            Self::OrphanDetail { item_id } => {
                write!(f, "detail record for unknown item '{item_id}'")
            }
            Self::ItemCountMismatch {
                category_id,
                declared,
                actual,
            } => write!(
                f,
                "category '{category_id}' declares {declared} items but has {actual}"
            ),
            Self::MissingCategory { category } => {
                write!(f, "items use category '{category}' which has no record")
            }
        }
    }
}

impl Catalog {
    /// Loads the catalog from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("catalog.json");
        Self::from_json(json_data).context("Failed to parse embedded catalog.json")
    }

    /// Parses a catalog from a JSON document with the catalog.json schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).context("Invalid catalog JSON")?;

        let detail_index = file
            .details
            .iter()
            .enumerate()
            .map(|(idx, detail)| (detail.item_id.clone(), idx))
            .collect();

        debug!(
            version = %file.version,
            categories = file.categories.len(),
            items = file.items.len(),
            details = file.details.len(),
            "catalog loaded"
        );

        Ok(Self {
            version: file.version,
            categories: file.categories,
            items: file.items,
            details: file.details,
            detail_index,
        })
    }

    /// Gets the schema version of the loaded catalog.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Gets all categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Gets all items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Gets a category by id.
    #[must_use]
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Gets the category record for a category type.
    #[must_use]
    pub fn category_by_type(&self, category_type: CategoryType) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.category_type == category_type)
    }

    /// Gets an item by id.
    #[must_use]
    pub fn item_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Gets all items in a category, preserving catalog order.
    #[must_use]
    pub fn items_by_category(&self, category_type: CategoryType) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category == category_type)
            .collect()
    }

    /// Searches items by case-insensitive substring match.
    ///
    /// The query is matched against each item's name, short description,
    /// and tags. Results keep catalog order. An empty query is a substring
    /// of everything, so it returns every item; callers that want "no
    /// results for blank input" must check before calling.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let query_lower = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches_lowercase(&query_lower))
            .collect()
    }

    /// Gets all items flagged as popular, preserving catalog order.
    #[must_use]
    pub fn popular_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_popular).collect()
    }

    /// Resolves an item's related ids to items.
    ///
    /// Ids that do not resolve are dropped silently. An unknown item id
    /// yields an empty list.
    #[must_use]
    pub fn related_items(&self, id: &str) -> Vec<&Item> {
        let Some(item) = self.item_by_id(id) else {
            return Vec::new();
        };

        item.related_item_ids
            .iter()
            .filter_map(|related_id| self.item_by_id(related_id))
            .collect()
    }

    /// Gets the detail record for an item, if one is authored.
    #[must_use]
    pub fn item_detail(&self, item_id: &str) -> Option<&ItemDetail> {
        let idx = self.detail_index.get(item_id)?;
        self.details.get(*idx)
    }

    /// Gets the total number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Gets the total number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Lists authoring problems: dangling relations, orphan details,
    /// stale item counts, and item categories without a record.
    #[must_use]
    pub fn integrity_report(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        for item in &self.items {
            for related_id in &item.related_item_ids {
                if self.item_by_id(related_id).is_none() {
                    issues.push(IntegrityIssue::DanglingRelatedId {
                        item_id: item.id.clone(),
                        missing_id: related_id.clone(),
                    });
                }
            }
        }

        for detail in &self.details {
            if self.item_by_id(&detail.item_id).is_none() {
                issues.push(IntegrityIssue::OrphanDetail {
                    item_id: detail.item_id.clone(),
                });
            }
        }

        for category in &self.categories {
            let actual = self.items_by_category(category.category_type).len();
            if actual != category.item_count {
                issues.push(IntegrityIssue::ItemCountMismatch {
                    category_id: category.id.clone(),
                    declared: category.item_count,
                    actual,
                });
            }
        }

        for category_type in CategoryType::all() {
            let used = self.items.iter().any(|item| item.category == *category_type);
            if used && self.category_by_type(*category_type).is_none() {
                issues.push(IntegrityIssue::MissingCategory {
                    category: category_type.id().to_string(),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_catalog() -> Catalog {
        Catalog::load().expect("Failed to load catalog")
    }

    fn fixture_catalog() -> Catalog {
        let json = r##"{
            "version": "test",
            "categories": [
                {
                    "id": "walls", "type": "walls", "name": "Walls",
                    "description": "Wall systems", "icon": "walls",
                    "color": "#8D8D8D", "item_count": 3, "examples": []
                }
            ],
            "items": [
                {
                    "id": "brick_wall", "name": "Brick Walls", "category": "walls",
                    "short_description": "Masonry", "popular": true,
                    "related_item_ids": ["ghost_wall", "partition_wall"]
                },
                {
                    "id": "partition_wall", "name": "Partition Walls", "category": "walls",
                    "short_description": "Interior divider", "related_item_ids": []
                },
                {
                    "id": "spiral_stairs", "name": "Spiral Stairs", "category": "stairs",
                    "short_description": "Compact staircase"
                }
            ],
            "details": [
                { "item_id": "brick_wall", "full_description": "Masonry walls" },
                { "item_id": "missing_item", "full_description": "Orphan" }
            ]
        }"##;
        Catalog::from_json(json).expect("fixture catalog should parse")
    }

    #[test]
    fn test_load_catalog() {
        let catalog = get_test_catalog();
        assert_eq!(catalog.category_count(), 6);
        assert_eq!(catalog.item_count(), 33);
        assert!(!catalog.version().is_empty());
    }

    #[test]
    fn test_item_by_id_returns_inserted_record() {
        let catalog = get_test_catalog();
        for item in catalog.items() {
            let found = catalog.item_by_id(&item.id).unwrap();
            assert_eq!(found, item);
            // Idempotent under repeated lookups
            assert_eq!(catalog.item_by_id(&item.id).unwrap(), found);
        }
    }

    #[test]
    fn test_item_by_id_unknown() {
        assert!(get_test_catalog().item_by_id("no_such_item").is_none());
    }

    #[test]
    fn test_items_by_category_is_exact_ordered_subset() {
        let catalog = get_test_catalog();
        for category_type in CategoryType::all() {
            let expected: Vec<&Item> = catalog
                .items()
                .iter()
                .filter(|item| item.category == *category_type)
                .collect();
            assert_eq!(catalog.items_by_category(*category_type), expected);
        }
    }

    #[test]
    fn test_walls_scenario() {
        let catalog = get_test_catalog();
        let walls = catalog.items_by_category(CategoryType::Walls);
        assert_eq!(walls.len(), 6);

        let popular_walls: Vec<&Item> = catalog
            .popular_items()
            .into_iter()
            .filter(|item| item.category == CategoryType::Walls)
            .collect();
        assert_eq!(popular_walls.len(), 2);
    }

    #[test]
    fn test_category_lookups() {
        let catalog = get_test_catalog();
        let category = catalog.category_by_id("windows_doors").unwrap();
        assert_eq!(category.name, "Windows & Doors");
        assert_eq!(
            catalog.category_by_type(CategoryType::WindowsDoors).unwrap(),
            category
        );
        assert!(catalog.category_by_id("basements").is_none());
    }

    #[test]
    fn test_search_brick() {
        let catalog = get_test_catalog();
        let results = catalog.search("brick");
        assert!(results.iter().any(|item| item.name == "Brick Walls"));
    }

    #[test]
    fn test_search_case_insensitive() {
        let catalog = get_test_catalog();
        assert_eq!(catalog.search("brick"), catalog.search("BRICK"));
        assert_eq!(catalog.search("Glass"), catalog.search("gLaSs"));
    }

    #[test]
    fn test_search_matches_tags() {
        let catalog = get_test_catalog();
        let results = catalog.search("cantilevered");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "floating_stairs");
    }

    #[test]
    fn test_search_no_results() {
        assert!(get_test_catalog().search("xyz123").is_empty());
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let catalog = get_test_catalog();
        assert_eq!(catalog.search("").len(), catalog.item_count());
    }

    #[test]
    fn test_popular_items_preserve_order() {
        let catalog = get_test_catalog();
        let popular = catalog.popular_items();
        assert!(popular.iter().all(|item| item.is_popular));

        let positions: Vec<usize> = popular
            .iter()
            .map(|p| catalog.items().iter().position(|i| i.id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_related_items() {
        let catalog = get_test_catalog();
        let related = catalog.related_items("brick_wall");
        let ids: Vec<&str> = related.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["concrete_wall", "load_bearing_wall"]);
    }

    #[test]
    fn test_related_items_never_dangle() {
        let catalog = get_test_catalog();
        for item in catalog.items() {
            for related in catalog.related_items(&item.id) {
                assert!(catalog.item_by_id(&related.id).is_some());
            }
        }
    }

    #[test]
    fn test_related_items_drops_unknown_ids() {
        let catalog = fixture_catalog();
        let related = catalog.related_items("brick_wall");
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "partition_wall");
    }

    #[test]
    fn test_related_items_unknown_item() {
        assert!(get_test_catalog().related_items("nope").is_empty());
    }

    #[test]
    fn test_item_detail_sparse() {
        let catalog = get_test_catalog();
        let detail = catalog.item_detail("brick_wall").unwrap();
        assert_eq!(detail.item_id, "brick_wall");
        assert!(detail.has_specs());
        assert!(catalog.item_detail("skylight").is_none());
    }

    #[test]
    fn test_shipped_catalog_is_consistent() {
        assert!(get_test_catalog().integrity_report().is_empty());
    }

    #[test]
    fn test_integrity_report_on_fixture() {
        let issues = fixture_catalog().integrity_report();
        assert!(issues.contains(&IntegrityIssue::DanglingRelatedId {
            item_id: "brick_wall".to_string(),
            missing_id: "ghost_wall".to_string(),
        }));
        assert!(issues.contains(&IntegrityIssue::OrphanDetail {
            item_id: "missing_item".to_string(),
        }));
        assert!(issues.contains(&IntegrityIssue::ItemCountMismatch {
            category_id: "walls".to_string(),
            declared: 3,
            actual: 2,
        }));
        assert!(issues.contains(&IntegrityIssue::MissingCategory {
            category: "stairs".to_string(),
        }));
        assert_eq!(issues.len(), 4);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Catalog::from_json("{ not json").is_err());
    }
}
