//! Category screen: items in one category with a popular-only filter.

use std::sync::Arc;

use tracing::warn;

use super::{failure_message, LoadState, Observable};
use crate::models::{Category, Item};
use crate::repository::BuildingRepository;

/// State for a single category's item list.
///
/// The popular-only toggle filters the already-fetched items; it never
/// goes back to the repository.
pub struct CategoryState<R> {
    repository: Arc<R>,
    status: Observable<LoadState>,
    category: Observable<Option<Category>>,
    items: Observable<Vec<Item>>,
    filtered_items: Observable<Vec<Item>>,
    show_popular_only: Observable<bool>,
}

impl<R: BuildingRepository> CategoryState<R> {
    /// Creates a holder in the `Loading` state.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            status: Observable::new(LoadState::Loading),
            category: Observable::new(None),
            items: Observable::default(),
            filtered_items: Observable::default(),
            show_popular_only: Observable::new(false),
        }
    }

    /// Loads a category and its items.
    ///
    /// An unknown id ends in `Error("Category not found")`.
    pub async fn load(&self, category_id: &str) {
        self.status.set(LoadState::Loading);

        let category = match self.repository.category_by_id(category_id).await {
            Ok(Some(category)) => category,
            Ok(None) => {
                self.status
                    .set(LoadState::Error("Category not found".to_string()));
                return;
            }
            Err(err) => {
                warn!("Failed to load category {category_id}: {err}");
                self.status.set(LoadState::Error(failure_message(
                    &err,
                    "Failed to load category",
                )));
                return;
            }
        };

        match self.repository.items_by_category(category.category_type).await {
            Ok(items) => {
                let status = if items.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Success
                };
                self.category.set(Some(category));
                self.items.set(items);
                self.apply_filters();
                self.status.set(status);
            }
            Err(err) => {
                warn!("Failed to load items for {category_id}: {err}");
                self.status.set(LoadState::Error(failure_message(
                    &err,
                    "Failed to load category",
                )));
            }
        }
    }

    /// Flips the popular-only filter and re-derives the visible list.
    pub fn toggle_popular_only(&self) {
        self.show_popular_only.set(!self.show_popular_only.get());
        self.apply_filters();
    }

    /// Reloads the current category. Does nothing before the first
    /// successful load.
    pub async fn refresh(&self) {
        let id = self.category.with(|category| category.as_ref().map(|c| c.id.clone()));
        if let Some(id) = id {
            self.load(&id).await;
        }
    }

    /// Number of items fetched for the category, ignoring the filter.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.with(Vec::len)
    }

    /// Number of popular items in the category.
    #[must_use]
    pub fn popular_count(&self) -> usize {
        self.items
            .with(|items| items.iter().filter(|item| item.is_popular).count())
    }

    // Only the visible list changes; status belongs to the fetch.
    fn apply_filters(&self) {
        let popular_only = self.show_popular_only.get();
        let mut visible: Vec<Item> = self.items.with(|items| {
            items
                .iter()
                .filter(|item| !popular_only || item.is_popular)
                .cloned()
                .collect()
        });
        visible.sort_by(|a, b| a.name.cmp(&b.name));
        self.filtered_items.set(visible);
    }

    /// Load lifecycle, driven only by fetches.
    pub fn status(&self) -> &Observable<LoadState> {
        &self.status
    }

    /// The loaded category record.
    pub fn category(&self) -> &Observable<Option<Category>> {
        &self.category
    }

    /// Every item fetched for the category.
    pub fn items(&self) -> &Observable<Vec<Item>> {
        &self.items
    }

    /// Items after the popular-only filter, sorted by name.
    pub fn filtered_items(&self) -> &Observable<Vec<Item>> {
        &self.filtered_items
    }

    /// Whether the popular-only filter is on.
    pub fn show_popular_only(&self) -> &Observable<bool> {
        &self.show_popular_only
    }
}
