//! Item detail screen.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{failure_message, LoadState, Observable};
use crate::models::{Item, ItemDetail, Specification};
use crate::repository::BuildingRepository;

/// State for a single item's detail view.
///
/// Never enters `LoadState::Empty`: an item without a detail record still
/// loads successfully with `detail` set to `None`.
pub struct DetailState<R> {
    repository: Arc<R>,
    status: Observable<LoadState>,
    item: Observable<Option<Item>>,
    detail: Observable<Option<ItemDetail>>,
    related_items: Observable<Vec<Item>>,
    is_favorite: Observable<bool>,
    image_index: Observable<usize>,
}

impl<R: BuildingRepository> DetailState<R> {
    /// Creates a holder in the `Loading` state.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            status: Observable::new(LoadState::Loading),
            item: Observable::new(None),
            detail: Observable::new(None),
            related_items: Observable::default(),
            is_favorite: Observable::new(false),
            image_index: Observable::new(0),
        }
    }

    /// Loads the item together with its detail record, related items and
    /// favorite flag.
    pub async fn load(&self, item_id: &str) {
        self.status.set(LoadState::Loading);

        let fetched = tokio::try_join!(
            self.repository.item_by_id(item_id),
            self.repository.item_detail(item_id),
            self.repository.related_items(item_id),
            self.repository.is_favorite(item_id),
        );

        match fetched {
            Ok((Some(item), detail, related, favorite)) => {
                debug!(
                    item_id,
                    has_detail = detail.is_some(),
                    related = related.len(),
                    "item loaded"
                );
                self.item.set(Some(item));
                self.detail.set(detail);
                self.related_items.set(related);
                self.is_favorite.set(favorite);
                self.image_index.set(0);
                self.status.set(LoadState::Success);
            }
            Ok((None, ..)) => {
                self.status.set(LoadState::Error("Item not found".to_string()));
            }
            Err(err) => {
                warn!("Failed to load item {item_id}: {err}");
                self.status.set(LoadState::Error(failure_message(
                    &err,
                    "Failed to load details",
                )));
            }
        }
    }

    /// Reloads the current item. Does nothing before the first successful load.
    pub async fn refresh(&self) {
        let id = self.item.with(|item| item.as_ref().map(|i| i.id.clone()));
        if let Some(id) = id {
            self.load(&id).await;
        }
    }

    /// Adds or removes the item from favorites.
    ///
    /// The local flag flips only once the repository confirms the change.
    pub async fn toggle_favorite(&self) {
        let Some(item_id) = self.item.with(|item| item.as_ref().map(|i| i.id.clone())) else {
            return;
        };

        let target = !self.is_favorite.get();
        let outcome = if target {
            self.repository.add_favorite(&item_id).await
        } else {
            self.repository.remove_favorite(&item_id).await
        };

        match outcome {
            Ok(true) => {
                self.is_favorite.set(target);
            }
            Ok(false) => debug!(item_id = %item_id, "favorite change not applied"),
            Err(err) => warn!("Failed to update favorite for {item_id}: {err}"),
        }
    }

    /// Selects a gallery image, clamped to the available range.
    pub fn set_image_index(&self, index: usize) {
        let last = self.image_count().saturating_sub(1);
        self.image_index.set(index.min(last));
    }

    /// Moves to the next image, stopping at the last.
    pub fn next_image(&self) {
        self.set_image_index(self.image_index.get().saturating_add(1));
    }

    /// Moves to the previous image, stopping at the first.
    pub fn previous_image(&self) {
        self.set_image_index(self.image_index.get().saturating_sub(1));
    }

    /// Number of gallery images.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.detail
            .with(|detail| detail.as_ref().map_or(0, |d| d.images.len()))
    }

    /// Whether the detail has any images.
    #[must_use]
    pub fn has_images(&self) -> bool {
        self.detail
            .with(|detail| detail.as_ref().is_some_and(ItemDetail::has_images))
    }

    /// Whether the detail has any specifications.
    #[must_use]
    pub fn has_specs(&self) -> bool {
        self.detail
            .with(|detail| detail.as_ref().is_some_and(ItemDetail::has_specs))
    }

    /// Specifications grouped by category label, in first-seen order.
    #[must_use]
    pub fn grouped_specifications(&self) -> Vec<(String, Vec<Specification>)> {
        self.detail
            .with(|detail| detail.as_ref().map(ItemDetail::specs_by_category))
            .unwrap_or_default()
    }

    /// Load lifecycle.
    pub fn status(&self) -> &Observable<LoadState> {
        &self.status
    }

    /// The loaded item.
    pub fn item(&self) -> &Observable<Option<Item>> {
        &self.item
    }

    /// Extended detail, absent for items without one.
    pub fn detail(&self) -> &Observable<Option<ItemDetail>> {
        &self.detail
    }

    /// Related items that exist in the catalog.
    pub fn related_items(&self) -> &Observable<Vec<Item>> {
        &self.related_items
    }

    /// Favorite flag as last confirmed by the repository.
    pub fn is_favorite(&self) -> &Observable<bool> {
        &self.is_favorite
    }

    /// Selected gallery image.
    pub fn image_index(&self) -> &Observable<usize> {
        &self.image_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::ScriptedRepository;

    async fn loaded(id: &str) -> (Arc<ScriptedRepository>, DetailState<ScriptedRepository>) {
        let repo = Arc::new(ScriptedRepository::new());
        let state = DetailState::new(Arc::clone(&repo));
        state.load(id).await;
        (repo, state)
    }

    #[tokio::test]
    async fn test_load_with_detail() {
        let (_, state) = loaded("brick_wall").await;

        assert_eq!(state.status().get(), LoadState::Success);
        assert_eq!(state.item().get().unwrap().name, "Brick Walls");
        assert!(state.detail().get().is_some());
        assert!(!state.related_items().get().is_empty());
        assert!(!state.is_favorite().get());
        assert!(state.has_images());
        assert!(state.has_specs());
        assert_eq!(state.image_count(), 3);

        let groups = state.grouped_specifications();
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Material", "Dimensional", "Structural", "Performance", "Maintenance"]
        );
        assert_eq!(groups[3].1.len(), 2);
    }

    #[tokio::test]
    async fn test_load_without_detail_is_still_success() {
        let (_, state) = loaded("hip_roof").await;

        assert_eq!(state.status().get(), LoadState::Success);
        assert!(state.detail().get().is_none());
        assert!(!state.has_images());
        assert!(!state.has_specs());
        assert!(state.grouped_specifications().is_empty());
        assert_eq!(state.related_items().get()[0].id, "gable_roof");
    }

    #[tokio::test]
    async fn test_unknown_item() {
        let (_, state) = loaded("ghost").await;
        assert_eq!(
            state.status().get(),
            LoadState::Error("Item not found".to_string())
        );
    }

    #[tokio::test]
    async fn test_toggle_favorite_confirms_with_repository() {
        let (repo, state) = loaded("spiral_stairs").await;

        state.toggle_favorite().await;
        assert!(state.is_favorite().get());
        assert!(repo.is_favorite("spiral_stairs").await.unwrap());

        state.toggle_favorite().await;
        assert!(!state.is_favorite().get());
        assert!(!repo.is_favorite("spiral_stairs").await.unwrap());
    }

    #[tokio::test]
    async fn test_toggle_favorite_failure_leaves_flag() {
        let (repo, state) = loaded("spiral_stairs").await;
        repo.set_failing(true);

        state.toggle_favorite().await;
        assert!(!state.is_favorite().get());
    }

    #[tokio::test]
    async fn test_toggle_favorite_before_load_is_noop() {
        let repo = Arc::new(ScriptedRepository::new());
        let state = DetailState::new(Arc::clone(&repo));

        state.toggle_favorite().await;
        assert!(!state.is_favorite().get());
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_favorite_status_survives_reload() {
        let (repo, state) = loaded("doric_column").await;
        state.toggle_favorite().await;

        let other = DetailState::new(Arc::clone(&repo));
        other.load("doric_column").await;
        assert!(other.is_favorite().get());
    }

    #[tokio::test]
    async fn test_image_index_clamps() {
        let (_, state) = loaded("brick_wall").await;

        state.set_image_index(2);
        assert_eq!(state.image_index().get(), 2);
        state.set_image_index(99);
        assert_eq!(state.image_index().get(), 2);

        state.next_image();
        assert_eq!(state.image_index().get(), 2);
        state.previous_image();
        state.previous_image();
        state.previous_image();
        assert_eq!(state.image_index().get(), 0);
    }

    #[tokio::test]
    async fn test_image_index_without_images_stays_zero() {
        let (_, state) = loaded("wood_floor").await;
        assert_eq!(state.image_count(), 0);

        state.set_image_index(5);
        assert_eq!(state.image_index().get(), 0);
    }

    #[tokio::test]
    async fn test_refresh_resets_image_index() {
        let (_, state) = loaded("gable_roof").await;
        state.set_image_index(1);

        state.refresh().await;
        assert_eq!(state.status().get(), LoadState::Success);
        assert_eq!(state.image_index().get(), 0);
    }

    #[tokio::test]
    async fn test_load_failure() {
        let repo = Arc::new(ScriptedRepository::new());
        repo.set_failing(true);
        let state = DetailState::new(repo);
        state.load("brick_wall").await;

        assert_eq!(
            state.status().get(),
            LoadState::Error("Catalog unavailable".to_string())
        );
    }
}
