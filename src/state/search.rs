//! Search screen: debounced free-text search with recent searches.
//!
//! Every query change cancels the pending search task and spawns a new one
//! that sleeps for the debounce delay before querying the repository. Each
//! dispatch carries a generation number; a task only publishes results while
//! its generation is still current, so a superseded search can never
//! overwrite the state of a newer one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{failure_message, Observable};
use crate::models::{CategoryType, Item};
use crate::repository::BuildingRepository;

/// Search lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SearchStatus {
    /// No query entered
    Initial,
    /// A search is in flight
    Searching,
    /// The last search returned results
    Success,
    /// The last search for this query returned nothing
    NoResults(String),
    /// The last search failed
    Error(String),
}

#[derive(Default)]
struct Dispatch {
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Dispatch {
    /// Aborts the pending task and starts a new generation.
    fn supersede(&mut self) -> u64 {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}

struct SearchInner<R> {
    repository: Arc<R>,
    debounce: Duration,
    query: Observable<String>,
    results: Observable<Vec<Item>>,
    status: Observable<SearchStatus>,
    selected_category: Observable<Option<CategoryType>>,
    recent_searches: Observable<Vec<String>>,
    dispatch: Mutex<Dispatch>,
}

impl<R: BuildingRepository> SearchInner<R> {
    fn lock_dispatch(&self) -> MutexGuard<'_, Dispatch> {
        self.dispatch.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `apply` only if `generation` is still current.
    fn publish(&self, generation: u64, apply: impl FnOnce()) -> bool {
        let dispatch = self.lock_dispatch();
        if dispatch.generation != generation {
            return false;
        }
        apply();
        true
    }

    async fn perform_search(&self, query: String, generation: u64) {
        if !self.publish(generation, || {
            self.status.set(SearchStatus::Searching);
        }) {
            return;
        }

        let category = self.selected_category.get();
        match self.repository.search_items(&query, category).await {
            Ok(results) => {
                debug!(query = %query, results = results.len(), "search finished");
                let published = self.publish(generation, || {
                    let status = if results.is_empty() {
                        SearchStatus::NoResults(query.clone())
                    } else {
                        SearchStatus::Success
                    };
                    self.results.set(results);
                    self.status.set(status);
                });
                if published {
                    self.record_recent_search(&query).await;
                }
            }
            Err(err) => {
                warn!("Search for '{query}' failed: {err}");
                self.publish(generation, || {
                    self.status
                        .set(SearchStatus::Error(failure_message(&err, "Search failed")));
                });
            }
        }
    }

    async fn record_recent_search(&self, query: &str) {
        if let Err(err) = self.repository.add_recent_search(query).await {
            warn!("Failed to record recent search: {err}");
            return;
        }
        self.reload_recent_searches().await;
    }

    async fn reload_recent_searches(&self) {
        match self.repository.recent_searches().await {
            Ok(recent) => {
                self.recent_searches.set(recent);
            }
            Err(err) => warn!("Failed to load recent searches: {err}"),
        }
    }
}

/// State for the search screen.
///
/// [`Self::on_query_change`] and [`Self::set_category`] spawn onto the
/// current Tokio runtime and must be called from within one. Dropping the
/// state aborts any pending search.
pub struct SearchState<R> {
    inner: Arc<SearchInner<R>>,
}

impl<R: BuildingRepository> SearchState<R> {
    /// Creates the holder in the `Initial` state.
    #[must_use]
    pub fn new(repository: Arc<R>, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(SearchInner {
                repository,
                debounce,
                query: Observable::default(),
                results: Observable::default(),
                status: Observable::new(SearchStatus::Initial),
                selected_category: Observable::new(None),
                recent_searches: Observable::default(),
                dispatch: Mutex::new(Dispatch::default()),
            }),
        }
    }

    /// Pulls the recent-search list from the repository.
    pub async fn load_recent_searches(&self) {
        self.inner.reload_recent_searches().await;
    }

    /// Stores `query` and schedules a debounced search.
    ///
    /// Any pending search is cancelled. A blank query resets to `Initial`
    /// without searching.
    pub fn on_query_change(&self, query: impl Into<String>) {
        let query = query.into();
        self.inner.query.set(query.clone());

        if query.trim().is_empty() {
            let mut dispatch = self.inner.lock_dispatch();
            dispatch.supersede();
            self.inner.results.set(Vec::new());
            self.inner.status.set(SearchStatus::Initial);
            return;
        }

        self.dispatch(query, self.inner.debounce);
    }

    /// Changes the category filter, re-running a non-blank query at once.
    pub fn set_category(&self, category: Option<CategoryType>) {
        self.inner.selected_category.set(category);

        let query = self.inner.query.get();
        if !query.trim().is_empty() {
            self.dispatch(query, Duration::ZERO);
        }
    }

    /// Resets query, results, filter and status.
    pub fn clear_search(&self) {
        let mut dispatch = self.inner.lock_dispatch();
        dispatch.supersede();
        self.inner.query.set(String::new());
        self.inner.results.set(Vec::new());
        self.inner.selected_category.set(None);
        self.inner.status.set(SearchStatus::Initial);
    }

    /// Forgets all recent searches.
    pub async fn clear_recent_searches(&self) {
        match self.inner.repository.clear_recent_searches().await {
            Ok(()) => {
                self.inner.recent_searches.set(Vec::new());
            }
            Err(err) => warn!("Failed to clear recent searches: {err}"),
        }
    }

    /// Waits for the pending search, if any, to finish.
    pub async fn wait_idle(&self) {
        let pending = self.inner.lock_dispatch().pending.take();
        if let Some(handle) = pending {
            if let Err(err) = handle.await {
                if err.is_panic() {
                    warn!("Search task panicked: {err}");
                }
            }
        }
    }

    fn dispatch(&self, query: String, delay: Duration) {
        let mut dispatch = self.inner.lock_dispatch();
        let generation = dispatch.supersede();
        debug!(query = %query, generation, "search scheduled");

        let inner = Arc::clone(&self.inner);
        dispatch.pending = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            inner.perform_search(query, generation).await;
        }));
    }

    /// Current query text.
    pub fn query(&self) -> &Observable<String> {
        &self.inner.query
    }

    /// Results of the last published search.
    pub fn results(&self) -> &Observable<Vec<Item>> {
        &self.inner.results
    }

    /// Search lifecycle.
    pub fn status(&self) -> &Observable<SearchStatus> {
        &self.inner.status
    }

    /// Active category filter, if any.
    pub fn selected_category(&self) -> &Observable<Option<CategoryType>> {
        &self.inner.selected_category
    }

    /// Recent queries, most recent first.
    pub fn recent_searches(&self) -> &Observable<Vec<String>> {
        &self.inner.recent_searches
    }
}

impl<R> Drop for SearchState<R> {
    fn drop(&mut self) {
        let mut dispatch = self
            .inner
            .dispatch
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = dispatch.pending.take() {
            handle.abort();
        }
    }
}
