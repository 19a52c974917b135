//! Product listing engine.
//!
//! Fetches the category-filtered full set from the catalog, then orders and
//! pages it client-side:
//! - a category change (or the first activation, or an explicit refresh)
//!   re-fetches the full set;
//! - sort, page and page-size changes re-slice the cached set without IO.
//!
//! Operations take `&self`, so a new operation may start while an earlier fetch
//! is still outstanding. Every fetch carries the generation it was issued
//! under; a response whose generation is no longer current is discarded.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopdesk_catalog::{CatalogError, CatalogService, ProductQuery};
use shopdesk_products::{Product, paginate, sort_products, total_pages};
use tokio::sync::watch;

use crate::filters::{FilterUpdate, ProductFilters};
use crate::state::{FETCH_FAILED_MESSAGE, ListState};

/// What kind of feedback an in-flight operation should drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    Loading,
    Updating,
    Paginating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Activate,
    Refresh,
}

/// Full set fetched for one category.
#[derive(Debug)]
struct FetchedSet {
    category: Option<String>,
    products: Vec<Product>,
}

#[derive(Debug)]
struct Inner {
    state: ListState,
    /// Filters of the last successful publish; restored when a fetch fails.
    committed: ProductFilters,
    fetched: Option<FetchedSet>,
    generation: u64,
}

/// Outstanding fetch, tagged with the generation and filters it was issued for.
#[derive(Debug)]
struct FetchTicket {
    generation: u64,
    filters: ProductFilters,
    query: ProductQuery,
}

/// Client-side listing over a `CatalogService`.
pub struct ProductListEngine<S: ?Sized> {
    service: Arc<S>,
    inner: Mutex<Inner>,
    state_tx: watch::Sender<ListState>,
}

impl<S> ProductListEngine<S>
where
    S: CatalogService + ?Sized,
{
    /// Create an engine that has not fetched anything yet (`loading` is set
    /// until the first activation completes).
    pub fn new(service: Arc<S>, filters: ProductFilters) -> Self {
        let filters = filters.normalized();
        let state = ListState::initial(filters.clone());
        let (state_tx, _) = watch::channel(state.clone());

        Self {
            service,
            inner: Mutex::new(Inner {
                state,
                committed: filters,
                fetched: None,
                generation: 0,
            }),
            state_tx,
        }
    }

    /// Create and activate in one step.
    pub async fn initialize(service: Arc<S>, filters: ProductFilters) -> Self {
        let engine = Self::new(service, filters);
        engine.activate().await;
        engine
    }

    /// First activation: fetch the full set for the current category and
    /// publish the current page.
    pub async fn activate(&self) {
        self.run(self.begin_change(Change::Activate)).await;
    }

    /// Merge a partial filter change and refresh the listing.
    pub async fn update_filters(&self, update: FilterUpdate) {
        self.run(self.begin_update(&update)).await;
    }

    /// Move forward one page; ignored on the last page.
    pub async fn next_page(&self) {
        let target = {
            let inner = self.lock();
            inner
                .state
                .has_next_page()
                .then(|| inner.state.filters.page + 1)
        };
        if let Some(page) = target {
            self.update_filters(FilterUpdate::new().page(page)).await;
        }
    }

    /// Move back one page; ignored on the first page.
    pub async fn prev_page(&self) {
        let target = {
            let inner = self.lock();
            inner
                .state
                .has_prev_page()
                .then(|| inner.state.filters.page - 1)
        };
        if let Some(page) = target {
            self.update_filters(FilterUpdate::new().page(page)).await;
        }
    }

    /// Re-fetch the current category and re-publish the current page.
    pub async fn refresh(&self) {
        self.run(self.begin_change(Change::Refresh)).await;
    }

    /// Snapshot of the current listing.
    pub fn state(&self) -> ListState {
        self.lock().state.clone()
    }

    /// Observe every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state_tx.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn run(&self, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        let result = self.service.list_products(&ticket.query).await;
        self.complete(ticket, result);
    }

    fn begin_change(&self, change: Change) -> Option<FetchTicket> {
        let mut inner = self.lock();
        let filters = inner.state.filters.clone();

        let activity = if inner.fetched.is_none() {
            Activity::Loading
        } else if change == Change::Refresh && filters.page > 1 {
            Activity::Paginating
        } else {
            Activity::Updating
        };

        let force = change == Change::Refresh || inner.fetched.is_none();
        self.begin(&mut inner, filters, activity, force)
    }

    fn begin_update(&self, update: &FilterUpdate) -> Option<FetchTicket> {
        let mut inner = self.lock();
        let previous = inner.state.filters.clone();
        let next = previous.merge(update);

        let filtering = update.resets_page()
            || next.category != previous.category
            || next.sort != previous.sort
            || next.limit != previous.limit;

        let activity = if inner.fetched.is_none() {
            Activity::Loading
        } else if filtering {
            Activity::Updating
        } else {
            Activity::Paginating
        };

        self.begin(&mut inner, next, activity, false)
    }

    /// Install `filters` as the pending state. Re-slices the cached set when it
    /// still matches the category, otherwise hands back a fetch ticket.
    fn begin(
        &self,
        inner: &mut Inner,
        filters: ProductFilters,
        activity: Activity,
        force_fetch: bool,
    ) -> Option<FetchTicket> {
        inner.generation += 1;
        inner.state.filters = filters.clone();
        inner.state.error = None;

        let cached = inner
            .fetched
            .as_ref()
            .is_some_and(|set| set.category == filters.category);

        if cached && !force_fetch {
            Self::publish(inner);
            self.state_tx.send_replace(inner.state.clone());
            return None;
        }

        inner.state.clear_activity();
        match activity {
            Activity::Loading => inner.state.loading = true,
            Activity::Updating => inner.state.updating = true,
            Activity::Paginating => inner.state.paginating = true,
        }
        self.state_tx.send_replace(inner.state.clone());

        tracing::info!(
            generation = inner.generation,
            category = filters.category.as_deref().unwrap_or("*"),
            ?activity,
            "fetching products"
        );

        Some(FetchTicket {
            generation: inner.generation,
            query: filters.query(),
            filters,
        })
    }

    fn complete(&self, ticket: FetchTicket, result: Result<Vec<Product>, CatalogError>) {
        let mut inner = self.lock();

        if ticket.generation != inner.generation || ticket.filters != inner.state.filters {
            tracing::debug!(
                generation = ticket.generation,
                current = inner.generation,
                "discarding stale product response"
            );
            return;
        }

        match result {
            Ok(products) => {
                tracing::info!(
                    generation = ticket.generation,
                    count = products.len(),
                    "products fetched"
                );
                inner.fetched = Some(FetchedSet {
                    category: ticket.filters.category,
                    products,
                });
                Self::publish(&mut inner);
            }
            Err(err) => {
                tracing::error!(
                    generation = ticket.generation,
                    transient = err.is_transient(),
                    error = %err,
                    "failed to fetch products"
                );
                inner.state.filters = inner.committed.clone();
                inner.state.error = Some(FETCH_FAILED_MESSAGE.to_string());
                inner.state.clear_activity();
            }
        }

        self.state_tx.send_replace(inner.state.clone());
    }

    /// Order and slice the cached set for the pending filters, clamping the
    /// page into range, and commit the result.
    fn publish(inner: &mut Inner) {
        let Some(set) = inner.fetched.as_ref() else {
            return;
        };

        let mut filters = inner.state.filters.clone();
        let pages = total_pages(set.products.len(), filters.limit);
        filters.page = filters.page.clamp(1, pages);

        let ordered = sort_products(&set.products, filters.sort);
        inner.state.products = paginate(&ordered, filters.page, filters.limit);
        inner.state.total_pages = pages;
        inner.state.filters = filters.clone();
        inner.state.error = None;
        inner.state.clear_activity();
        inner.committed = filters;
    }
}
