//! Browse screen: every item, with a category filter and sort order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{failure_message, LoadState, Observable};
use crate::models::{CategoryType, Item};
use crate::repository::BuildingRepository;

/// Ordering applied to the browse list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// By item name
    #[default]
    Alphabetical,
    /// By category display name, catalog order within a category
    Category,
    /// Popular items first, catalog order otherwise
    Popular,
}

impl SortOrder {
    /// All sort orders.
    pub const ALL: [Self; 3] = [Self::Alphabetical, Self::Category, Self::Popular];

    /// Stable identifier used on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::Category => "category",
            Self::Popular => "popular",
        }
    }

    /// Sorts `items` in place. All orders are stable.
    pub fn apply(self, items: &mut [Item]) {
        match self {
            Self::Alphabetical => items.sort_by(|a, b| a.name.cmp(&b.name)),
            Self::Category => {
                items.sort_by(|a, b| a.category.display_name().cmp(b.category.display_name()));
            }
            Self::Popular => items.sort_by_key(|item| !item.is_popular),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown sort order '{s}'. Expected alphabetical, category or popular")
            })
    }
}

/// State for the browse-all list.
///
/// Items are fetched once; filter and sort changes re-derive the visible
/// list from the cached copy.
pub struct BrowseState<R> {
    repository: Arc<R>,
    status: Observable<LoadState>,
    all_items: Observable<Vec<Item>>,
    filtered_items: Observable<Vec<Item>>,
    selected_category: Observable<Option<CategoryType>>,
    sort_order: Observable<SortOrder>,
}

impl<R: BuildingRepository> BrowseState<R> {
    /// Creates a holder in the `Loading` state with no filter.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            status: Observable::new(LoadState::Loading),
            all_items: Observable::default(),
            filtered_items: Observable::default(),
            selected_category: Observable::new(None),
            sort_order: Observable::new(SortOrder::default()),
        }
    }

    /// Fetches all items and applies the current filter and sort.
    pub async fn load(&self) {
        self.status.set(LoadState::Loading);

        match self.repository.all_items().await {
            Ok(items) => {
                let status = if items.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Success
                };
                self.all_items.set(items);
                self.apply_filters_and_sort();
                self.status.set(status);
            }
            Err(err) => {
                warn!("Failed to load items: {err}");
                self.status
                    .set(LoadState::Error(failure_message(&err, "Failed to load items")));
            }
        }
    }

    /// Fetches the item list again.
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Restricts the list to one category, or clears the restriction.
    pub fn set_category(&self, category: Option<CategoryType>) {
        self.selected_category.set(category);
        self.apply_filters_and_sort();
    }

    /// Changes the ordering of the visible list.
    pub fn set_sort_order(&self, order: SortOrder) {
        self.sort_order.set(order);
        self.apply_filters_and_sort();
    }

    /// Resets the category filter and the sort order.
    pub fn clear_filters(&self) {
        self.selected_category.set(None);
        self.sort_order.set(SortOrder::default());
        self.apply_filters_and_sort();
    }

    /// Visible items bucketed by the uppercase first letter of their name.
    ///
    /// Items keep the current sort order within a bucket.
    #[must_use]
    pub fn items_grouped_by_letter(&self) -> BTreeMap<char, Vec<Item>> {
        let mut groups: BTreeMap<char, Vec<Item>> = BTreeMap::new();
        self.filtered_items.with(|items| {
            for item in items {
                let letter = item
                    .name
                    .chars()
                    .next()
                    .map_or('#', |c| c.to_ascii_uppercase());
                groups.entry(letter).or_default().push(item.clone());
            }
        });
        groups
    }

    // Only the visible list changes; status belongs to the fetch.
    fn apply_filters_and_sort(&self) {
        let category = self.selected_category.get();
        let order = self.sort_order.get();

        let mut visible: Vec<Item> = self.all_items.with(|items| {
            items
                .iter()
                .filter(|item| category.map_or(true, |c| item.category == c))
                .cloned()
                .collect()
        });
        order.apply(&mut visible);

        debug!(
            category = category.map(CategoryType::id),
            order = order.id(),
            visible = visible.len(),
            "browse list derived"
        );
        self.filtered_items.set(visible);
    }

    /// Load lifecycle, driven only by fetches.
    pub fn status(&self) -> &Observable<LoadState> {
        &self.status
    }

    /// Every item in catalog order.
    pub fn all_items(&self) -> &Observable<Vec<Item>> {
        &self.all_items
    }

    /// Items after the category filter and sort order.
    pub fn filtered_items(&self) -> &Observable<Vec<Item>> {
        &self.filtered_items
    }

    /// Active category filter, if any.
    pub fn selected_category(&self) -> &Observable<Option<CategoryType>> {
        &self.selected_category
    }

    /// Active sort order.
    pub fn sort_order(&self) -> &Observable<SortOrder> {
        &self.sort_order
    }
}
