//! Repository facade over the catalog.
//!
//! The [`BuildingRepository`] trait is the asynchronous contract screen state
//! holders depend on. [`CatalogRepository`] implements it over the in-memory
//! [`Catalog`], adding an artificial latency to every query and holding the
//! two pieces of mutable process state: favorites and recent searches.
//!
//! Neither favorites nor recent searches are persisted; both start empty
//! on every process start.

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::constants::{DEFAULT_MAX_RECENT_SEARCHES, DEFAULT_REPOSITORY_DELAY_MS};
use crate::models::{Category, CategoryType, Item, ItemDetail};

/// Asynchronous data contract between screen state holders and the catalog.
///
/// Every method returns owned data so results can cross task boundaries.
pub trait BuildingRepository: Send + Sync + 'static {
    /// Gets all categories.
    fn all_categories(&self) -> impl Future<Output = RepositoryResult<Vec<Category>>> + Send;

    /// Gets a category by id.
    fn category_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = RepositoryResult<Option<Category>>> + Send;

    /// Gets the category record for a category type.
    fn category_by_type(
        &self,
        category_type: CategoryType,
    ) -> impl Future<Output = RepositoryResult<Option<Category>>> + Send;

    /// Gets all items in catalog order.
    fn all_items(&self) -> impl Future<Output = RepositoryResult<Vec<Item>>> + Send;

    /// Gets an item by id.
    fn item_by_id(&self, id: &str) -> impl Future<Output = RepositoryResult<Option<Item>>> + Send;

    /// Gets all items in a category.
    fn items_by_category(
        &self,
        category_type: CategoryType,
    ) -> impl Future<Output = RepositoryResult<Vec<Item>>> + Send;

    /// Gets popular items.
    fn popular_items(&self) -> impl Future<Output = RepositoryResult<Vec<Item>>> + Send;

    /// Searches items, optionally restricted to one category.
    fn search_items(
        &self,
        query: &str,
        category_filter: Option<CategoryType>,
    ) -> impl Future<Output = RepositoryResult<Vec<Item>>> + Send;

    /// Resolves an item's related items, dropping unknown ids.
    fn related_items(&self, id: &str) -> impl Future<Output = RepositoryResult<Vec<Item>>> + Send;

    /// Gets the detail record for an item, if one exists.
    fn item_detail(
        &self,
        item_id: &str,
    ) -> impl Future<Output = RepositoryResult<Option<ItemDetail>>> + Send;

    /// Adds an item to favorites. Returns `true` on success.
    fn add_favorite(&self, item_id: &str) -> impl Future<Output = RepositoryResult<bool>> + Send;

    /// Removes an item from favorites. Returns `true` on success.
    fn remove_favorite(&self, item_id: &str)
        -> impl Future<Output = RepositoryResult<bool>> + Send;

    /// Checks whether an item is a favorite.
    fn is_favorite(&self, item_id: &str) -> impl Future<Output = RepositoryResult<bool>> + Send;

    /// Gets favorite items in catalog order.
    fn favorite_items(&self) -> impl Future<Output = RepositoryResult<Vec<Item>>> + Send;

    /// Records a query at the front of recent searches.
    fn add_recent_search(&self, query: &str) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// Gets recent searches, most recent first.
    fn recent_searches(&self) -> impl Future<Output = RepositoryResult<Vec<String>>> + Send;

    /// Forgets all recent searches.
    fn clear_recent_searches(&self) -> impl Future<Output = RepositoryResult<()>> + Send;
}

/// In-memory repository backed by the static catalog.
#[derive(Debug)]
pub struct CatalogRepository {
    /// Shared immutable catalog
    catalog: Arc<Catalog>,
    /// Artificial latency applied before each query returns
    delay: Duration,
    /// Cap on the recent-searches list
    max_recent_searches: usize,
    /// Favorite item ids
    favorites: RwLock<HashSet<String>>,
    /// Recent queries, most recent first
    recent_searches: RwLock<Vec<String>>,
}

impl CatalogRepository {
    /// Creates a repository with the default latency and recent-search cap.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            delay: Duration::from_millis(DEFAULT_REPOSITORY_DELAY_MS),
            max_recent_searches: DEFAULT_MAX_RECENT_SEARCHES,
            favorites: RwLock::new(HashSet::new()),
            recent_searches: RwLock::new(Vec::new()),
        }
    }

    /// Creates a repository using the latency and cap from `config`.
    #[must_use]
    pub fn from_config(catalog: Arc<Catalog>, config: &Config) -> Self {
        Self::new(catalog)
            .with_delay(config.repository_delay())
            .with_max_recent_searches(config.search.max_recent_searches)
    }

    /// Sets the artificial latency. `Duration::ZERO` disables it.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the recent-search cap (at least 1).
    #[must_use]
    pub fn with_max_recent_searches(mut self, max: usize) -> Self {
        self.max_recent_searches = max.max(1);
        self
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configured artificial latency.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn read_favorites(&self) -> RepositoryResult<RwLockReadGuard<'_, HashSet<String>>> {
        self.favorites
            .read()
            .map_err(|_| RepositoryError::OperationFailed("Favorites are unavailable".to_string()))
    }

    fn write_favorites(&self) -> RepositoryResult<RwLockWriteGuard<'_, HashSet<String>>> {
        self.favorites
            .write()
            .map_err(|_| RepositoryError::OperationFailed("Favorites are unavailable".to_string()))
    }

    fn read_recent(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<String>>> {
        self.recent_searches.read().map_err(|_| {
            RepositoryError::OperationFailed("Recent searches are unavailable".to_string())
        })
    }

    fn write_recent(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<String>>> {
        self.recent_searches.write().map_err(|_| {
            RepositoryError::OperationFailed("Recent searches are unavailable".to_string())
        })
    }
}

fn owned(items: Vec<&Item>) -> Vec<Item> {
    items.into_iter().cloned().collect()
}

impl BuildingRepository for CatalogRepository {
    async fn all_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.simulate_latency().await;
        debug!("all_categories");
        Ok(self.catalog.categories().to_vec())
    }

    async fn category_by_id(&self, id: &str) -> RepositoryResult<Option<Category>> {
        self.simulate_latency().await;
        debug!(id, "category_by_id");
        Ok(self.catalog.category_by_id(id).cloned())
    }

    async fn category_by_type(
        &self,
        category_type: CategoryType,
    ) -> RepositoryResult<Option<Category>> {
        self.simulate_latency().await;
        debug!(category = category_type.id(), "category_by_type");
        Ok(self.catalog.category_by_type(category_type).cloned())
    }

    async fn all_items(&self) -> RepositoryResult<Vec<Item>> {
        self.simulate_latency().await;
        debug!("all_items");
        Ok(self.catalog.items().to_vec())
    }

    async fn item_by_id(&self, id: &str) -> RepositoryResult<Option<Item>> {
        self.simulate_latency().await;
        debug!(id, "item_by_id");
        Ok(self.catalog.item_by_id(id).cloned())
    }

    async fn items_by_category(&self, category_type: CategoryType) -> RepositoryResult<Vec<Item>> {
        self.simulate_latency().await;
        debug!(category = category_type.id(), "items_by_category");
        Ok(owned(self.catalog.items_by_category(category_type)))
    }

    async fn popular_items(&self) -> RepositoryResult<Vec<Item>> {
        self.simulate_latency().await;
        debug!("popular_items");
        Ok(owned(self.catalog.popular_items()))
    }

    async fn search_items(
        &self,
        query: &str,
        category_filter: Option<CategoryType>,
    ) -> RepositoryResult<Vec<Item>> {
        self.simulate_latency().await;

        let results: Vec<Item> = self
            .catalog
            .search(query)
            .into_iter()
            .filter(|item| category_filter.map_or(true, |category| item.category == category))
            .cloned()
            .collect();

        debug!(
            query,
            category = category_filter.map(CategoryType::id),
            results = results.len(),
            "search_items"
        );
        Ok(results)
    }

    async fn related_items(&self, id: &str) -> RepositoryResult<Vec<Item>> {
        self.simulate_latency().await;
        debug!(id, "related_items");
        Ok(owned(self.catalog.related_items(id)))
    }

    async fn item_detail(&self, item_id: &str) -> RepositoryResult<Option<ItemDetail>> {
        self.simulate_latency().await;
        debug!(item_id, "item_detail");
        Ok(self.catalog.item_detail(item_id).cloned())
    }

    async fn add_favorite(&self, item_id: &str) -> RepositoryResult<bool> {
        self.write_favorites()?.insert(item_id.to_string());
        debug!(item_id, "favorite added");
        Ok(true)
    }

    async fn remove_favorite(&self, item_id: &str) -> RepositoryResult<bool> {
        self.write_favorites()?.remove(item_id);
        debug!(item_id, "favorite removed");
        Ok(true)
    }

    async fn is_favorite(&self, item_id: &str) -> RepositoryResult<bool> {
        Ok(self.read_favorites()?.contains(item_id))
    }

    async fn favorite_items(&self) -> RepositoryResult<Vec<Item>> {
        self.simulate_latency().await;
        let favorites = self.read_favorites()?.clone();
        Ok(self
            .catalog
            .items()
            .iter()
            .filter(|item| favorites.contains(&item.id))
            .cloned()
            .collect())
    }

    async fn add_recent_search(&self, query: &str) -> RepositoryResult<()> {
        let mut recent = self.write_recent()?;
        recent.retain(|existing| existing != query);
        recent.insert(0, query.to_string());
        recent.truncate(self.max_recent_searches);
        debug!(query, len = recent.len(), "recent search recorded");
        Ok(())
    }

    async fn recent_searches(&self) -> RepositoryResult<Vec<String>> {
        Ok(self.read_recent()?.clone())
    }

    async fn clear_recent_searches(&self) -> RepositoryResult<()> {
        self.write_recent()?.clear();
        debug!("recent searches cleared");
        Ok(())
    }
}
