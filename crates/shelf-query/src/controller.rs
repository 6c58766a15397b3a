//! The query-state controller.
//!
//! All state changes happen in [`SearchController::update`]. The controller
//! never sleeps and never performs I/O: it returns [`Effect`]s and its runtime
//! reports back with further [`Message`]s.

use std::ops::RangeInclusive;

use shelf_model::{FetchId, ResultSet, SortField, SortSpec};

use crate::builder::build_query;
use crate::config::ControllerConfig;
use crate::coordinator::{FetchCoordinator, FetchRequest, Verdict};
use crate::debounce::{Debouncer, TimerToken};
use crate::message::{Effect, Message};
use crate::pagination::{PageCount, Pagination};
use crate::sort::SortState;
use crate::state::{FetchError, ResultState};
use crate::view::ViewSnapshot;

/// Turns search, sort and page input into an ordered sequence of catalog
/// fetches and commits only the responses that are still current.
#[derive(Debug, Clone)]
pub struct SearchController {
    /// Raw search box text.
    input: String,
    /// Debounced search term.
    search: String,
    debouncer: Debouncer<String>,
    sort: SortState,
    pagination: Pagination,
    fetches: FetchCoordinator,
    results: ResultState,
    torn_down: bool,
}

impl SearchController {
    /// Create a controller and the fetch for the initial, unfiltered listing.
    pub fn new(config: &ControllerConfig) -> (Self, Vec<Effect>) {
        let mut controller = Self {
            input: String::new(),
            search: String::new(),
            debouncer: Debouncer::new(config.debounce()),
            sort: SortState::default(),
            pagination: Pagination::new(config.page_size),
            fetches: FetchCoordinator::new(),
            results: ResultState::default(),
            torn_down: false,
        };

        let effects = controller.refresh();
        (controller, effects)
    }

    /// Process one message and return the work it requires.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        if self.torn_down {
            tracing::trace!(?message, "controller torn down, ignoring message");
            return Vec::new();
        }

        match message {
            Message::SearchInput(text) => self.handle_search_input(text),
            Message::SortClicked(field) => self.handle_sort_click(field),
            Message::PageClicked(page) => self.handle_page_click(page),
            Message::DebounceElapsed(token) => self.handle_debounce_elapsed(token),
            Message::FetchCompleted { id, result } => self.handle_fetch_completed(id, result),
            Message::Teardown => self.handle_teardown(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Raw search box text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Debounced search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Active sort.
    pub fn sort(&self) -> SortSpec {
        self.sort.spec()
    }

    /// Active page.
    pub fn page(&self) -> u32 {
        self.pagination.page()
    }

    /// Page count from the last accepted result.
    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    /// Page buttons to offer.
    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        self.pagination.page_numbers()
    }

    /// Last accepted result.
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.results()
    }

    /// Error from the last accepted fetch.
    pub fn error(&self) -> Option<&FetchError> {
        self.results.error()
    }

    /// Whether the current fetch is still running.
    pub fn is_loading(&self) -> bool {
        self.fetches.is_loading()
    }

    /// Whether [`Message::Teardown`] has been processed.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Snapshot for the rendering surface.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            input: self.input.clone(),
            search: self.search.clone(),
            sort: self.sort.spec(),
            page: self.pagination.page(),
            total_pages: self.pagination.total_pages(),
            items: self
                .results
                .results()
                .map(|r| r.items.clone())
                .unwrap_or_default(),
            error: self.results.error().map(|e| e.message.clone()),
            loading: self.fetches.is_loading(),
            status: self.results.status(),
        }
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    fn handle_search_input(&mut self, text: String) -> Vec<Effect> {
        self.input.clone_from(&text);

        let Some(restart) = self.debouncer.push(text) else {
            return Vec::new();
        };

        let mut effects = Vec::with_capacity(2);
        if let Some(cancelled) = restart.cancelled {
            effects.push(Effect::CancelTimer(cancelled));
        }
        effects.push(Effect::StartTimer {
            token: restart.token,
            delay: restart.delay,
        });
        effects
    }

    fn handle_debounce_elapsed(&mut self, token: TimerToken) -> Vec<Effect> {
        let Some(term) = self.debouncer.fire(token) else {
            tracing::trace!(%token, "superseded debounce timer");
            return Vec::new();
        };

        tracing::debug!(search = %term, "search term settled");
        self.search = term;
        self.pagination.reset();
        self.refresh()
    }

    fn handle_sort_click(&mut self, field: SortField) -> Vec<Effect> {
        let spec = self.sort.click(field);
        tracing::debug!(sort = %spec, "sort changed");
        self.refresh()
    }

    fn handle_page_click(&mut self, page: u32) -> Vec<Effect> {
        if !self.pagination.go_to(page) {
            tracing::debug!(
                page,
                total_pages = self.pagination.total_pages(),
                "page out of range, ignoring"
            );
            return Vec::new();
        }
        self.refresh()
    }

    fn handle_fetch_completed(
        &mut self,
        id: FetchId,
        result: Result<ResultSet, FetchError>,
    ) -> Vec<Effect> {
        if let Verdict::Stale { current } = self.fetches.resolve(id, result.is_ok()) {
            tracing::warn!(%id, ?current, "dropping stale catalog response");
            return Vec::new();
        }

        match result {
            Ok(results) => {
                tracing::debug!(
                    %id,
                    items = results.len(),
                    total_pages = results.total_pages,
                    "catalog response accepted"
                );
                let count = self.pagination.set_total_pages(results.total_pages);
                self.results.accept(results);

                match count {
                    PageCount::Clamped { from, to } => {
                        tracing::info!(from, to, "active page no longer exists, clamping");
                        self.refresh()
                    }
                    PageCount::Unchanged => Vec::new(),
                }
            }
            Err(error) => {
                tracing::warn!(%id, %error, detail = ?error.detail, "catalog fetch failed");
                self.results.fail(error);
                Vec::new()
            }
        }
    }

    fn handle_teardown(&mut self) -> Vec<Effect> {
        tracing::debug!("tearing down search controller");
        self.torn_down = true;
        self.debouncer
            .dispose()
            .map(Effect::CancelTimer)
            .into_iter()
            .collect()
    }

    /// Build the query for the current inputs and issue it if it changed.
    fn refresh(&mut self) -> Vec<Effect> {
        let query = build_query(&self.search, self.sort.spec(), &self.pagination.window());
        self.fetches
            .issue(query)
            .map(|request: FetchRequest| {
                tracing::info!(id = %request.id, query = %request.query, "issuing catalog fetch");
                Effect::Fetch(request)
            })
            .into_iter()
            .collect()
    }
}
