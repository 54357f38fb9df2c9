//! Home screen: the category list.

use std::sync::Arc;

use tracing::warn;

use super::{failure_message, LoadState, Observable};
use crate::constants::GENERIC_ERROR_MESSAGE;
use crate::models::Category;
use crate::repository::BuildingRepository;

/// State for the category list.
pub struct HomeState<R> {
    repository: Arc<R>,
    status: Observable<LoadState>,
    categories: Observable<Vec<Category>>,
}

impl<R: BuildingRepository> HomeState<R> {
    /// Creates the holder in the `Loading` state. Call [`Self::load`] to fetch.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            status: Observable::new(LoadState::Loading),
            categories: Observable::default(),
        }
    }

    /// Fetches all categories.
    pub async fn load(&self) {
        self.status.set(LoadState::Loading);

        match self.repository.all_categories().await {
            Ok(categories) => {
                let status = if categories.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Success
                };
                self.categories.set(categories);
                self.status.set(status);
            }
            Err(err) => {
                warn!("Failed to load categories: {err}");
                self.status
                    .set(LoadState::Error(failure_message(&err, GENERIC_ERROR_MESSAGE)));
            }
        }
    }

    /// Re-runs [`Self::load`].
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Looks up a loaded category by id.
    #[must_use]
    pub fn category_by_id(&self, id: &str) -> Option<Category> {
        self.categories
            .with(|categories| categories.iter().find(|c| c.id == id).cloned())
    }

    /// Load lifecycle.
    pub fn status(&self) -> &Observable<LoadState> {
        &self.status
    }

    /// Loaded categories in catalog order.
    pub fn categories(&self) -> &Observable<Vec<Category>> {
        &self.categories
    }
}
