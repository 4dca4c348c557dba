//! # List Controller
//!
//! Keeps a resource list consistent with the latest user-specified query
//! and page under asynchronous, possibly-overlapping fetches.
//!
//! Three rules make it correct:
//!
//! 1. Free-text search is debounced; a fetch dispatches only after the
//!    input has been quiet for the configured window. Page changes and
//!    explicit refreshes dispatch immediately.
//! 2. Applying a search change resets the page to 1 before dispatch, so a
//!    newly-filtered (possibly shorter) result set is never asked for an
//!    out-of-range page.
//! 3. Every dispatch carries a monotonically increasing sequence number.
//!    An outcome, success or failure, is applied only if its tag still
//!    equals the latest dispatched number; superseded outcomes are
//!    discarded without touching visible state.
//!
//! Fetch execution follows the gateway service pattern: the work is
//! spawned onto the runtime and its outcome comes back over an internal
//! channel, so the caller's event loop stays responsive while a request is
//! in flight.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::api::error::{ApiError, ApiResult};
use crate::api::urls::ListParams;
use crate::config;
use crate::models::records::ListPage;

/// The triple driving every list fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub page: u32,
    pub page_size: u32,
}

impl ListQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            search_text: String::new(),
            page: 1,
            page_size,
        }
    }

    /// Convert to wire query parameters; empty search text is omitted
    pub fn to_params(&self) -> ListParams {
        ListParams {
            search: if self.search_text.is_empty() {
                None
            } else {
                Some(self.search_text.clone())
            },
            page: Some(self.page),
            limit: Some(self.page_size),
        }
    }
}

/// Visible state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Seam between the controller and a resource repository's list operation
#[async_trait]
pub trait ListFetcher<T: Send>: Send + Sync {
    async fn fetch(&self, query: &ListQuery) -> ApiResult<ListPage<T>>;
}

struct FetchOutcome<T> {
    seq: u64,
    outcome: ApiResult<ListPage<T>>,
}

struct PendingSearch {
    text: String,
    due: Instant,
}

/// The generic paginated, searchable, server-synchronized list controller
pub struct ListController<T: Send + 'static> {
    fetcher: Arc<dyn ListFetcher<T>>,
    query: ListQuery,
    phase: ListPhase,
    result: Option<ListPage<T>>,
    last_error: Option<ApiError>,
    latest_seq: u64,
    pending_search: Option<PendingSearch>,
    debounce: Duration,
    fetch_timeout: Duration,
    outcome_tx: mpsc::Sender<FetchOutcome<T>>,
    outcome_rx: mpsc::Receiver<FetchOutcome<T>>,
}

impl<T: Send + 'static> ListController<T> {
    /// Create a controller with the default debounce and fetch timeout
    pub fn new(fetcher: Arc<dyn ListFetcher<T>>, page_size: u32) -> Self {
        Self::with_timings(
            fetcher,
            page_size,
            config::SEARCH_DEBOUNCE,
            config::FETCH_TIMEOUT,
        )
    }

    /// Create a controller with explicit timings (tests tighten these)
    pub fn with_timings(
        fetcher: Arc<dyn ListFetcher<T>>,
        page_size: u32,
        debounce: Duration,
        fetch_timeout: Duration,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(16);
        Self {
            fetcher,
            query: ListQuery::new(page_size.max(1)),
            phase: ListPhase::Idle,
            result: None,
            last_error: None,
            latest_seq: 0,
            pending_search: None,
            debounce,
            fetch_timeout,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Records from the most recent applied successful fetch
    pub fn items(&self) -> &[T] {
        self.result.as_ref().map(|p| p.data.as_slice()).unwrap_or(&[])
    }

    /// Full server-side match count from the most recent successful fetch
    ///
    /// Never adjusted locally; mutations trigger a refetch instead.
    pub fn total(&self) -> u64 {
        self.result.as_ref().map(|p| p.total).unwrap_or(0)
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    /// Record a search keystroke; the fetch waits for the quiet window
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.pending_search = Some(PendingSearch {
            text: text.into(),
            due: Instant::now() + self.debounce,
        });
    }

    /// Apply a pending search immediately, skipping the remaining quiet time
    pub fn flush_search(&mut self) {
        if let Some(pending) = self.pending_search.take() {
            self.apply_search(pending.text);
        }
    }

    /// Deadline of the armed debounce, for event-loop sleep scheduling
    pub fn debounce_due(&self) -> Option<Instant> {
        self.pending_search.as_ref().map(|p| p.due)
    }

    /// Jump to a page; page changes are never debounced
    pub fn set_page(&mut self, page: u32) {
        self.query.page = page.max(1);
        self.dispatch();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.query.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.query.page.saturating_sub(1));
    }

    /// Refetch at the current query and page (mutation-refresh path)
    pub fn refresh(&mut self) {
        self.dispatch();
    }

    /// Fire a due debounce, if any
    pub fn tick(&mut self) {
        let due = self
            .pending_search
            .as_ref()
            .map(|p| p.due <= Instant::now())
            .unwrap_or(false);
        if due {
            let pending = self.pending_search.take().expect("checked above");
            self.apply_search(pending.text);
        }
    }

    /// Drain without blocking: fire due debounces, apply arrived outcomes
    pub fn poll(&mut self) {
        self.tick();
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Await the next fetch outcome and apply it; returns false when the
    /// outcome was stale and discarded
    pub async fn recv_applied(&mut self) -> bool {
        match self.outcome_rx.recv().await {
            Some(outcome) => self.apply_outcome(outcome),
            None => false,
        }
    }

    /// Applying a search change always resets to page 1 before dispatch
    fn apply_search(&mut self, text: String) {
        self.query.search_text = text;
        self.query.page = 1;
        self.dispatch();
    }

    fn dispatch(&mut self) {
        self.latest_seq += 1;
        self.phase = ListPhase::Loading;

        let seq = self.latest_seq;
        let query = self.query.clone();
        let fetcher = Arc::clone(&self.fetcher);
        let fetch_timeout = self.fetch_timeout;
        let tx = self.outcome_tx.clone();

        tracing::debug!(seq, page = query.page, search = %query.search_text, "dispatching list fetch");

        tokio::spawn(async move {
            let outcome = match tokio::time::timeout(fetch_timeout, fetcher.fetch(&query)).await {
                Ok(result) => result,
                Err(_) => Err(ApiError::Network(format!(
                    "request timed out after {fetch_timeout:?}"
                ))),
            };
            // Receiver dropped means the screen is gone; nothing to do.
            let _ = tx.send(FetchOutcome { seq, outcome }).await;
        });
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome<T>) -> bool {
        if outcome.seq != self.latest_seq {
            tracing::debug!(
                seq = outcome.seq,
                latest = self.latest_seq,
                "discarding stale fetch outcome"
            );
            return false;
        }
        match outcome.outcome {
            Ok(page) => {
                self.phase = ListPhase::Loaded;
                self.last_error = None;
                self.result = Some(page);
            }
            Err(err) => {
                // Keep the last good result visible; only the phase and
                // message change.
                tracing::warn!(%err, "list fetch failed");
                self.phase = ListPhase::Error;
                self.last_error = Some(err);
            }
        }
        true
    }

    /// Number of pages implied by the latest total
    pub fn page_count(&self) -> u32 {
        let total = self.total();
        let size = self.query.page_size as u64;
        total.div_ceil(size) as u32
    }

    /// "Showing X to Y of N entries" for the current page
    pub fn entries_line(&self) -> String {
        let total = self.total();
        if total == 0 {
            return "Showing 0 to 0 of 0 entries".to_string();
        }
        let size = self.query.page_size as u64;
        let start = (self.query.page as u64 - 1) * size + 1;
        let end = (self.query.page as u64 * size).min(total);
        format!("Showing {start} to {end} of {total} entries")
    }

    /// Windowed page-number controls around the current page
    pub fn page_window(&self) -> Vec<u32> {
        let total_pages = self.page_count();
        let current = self.query.page;
        if total_pages == 0 {
            Vec::new()
        } else if total_pages <= 3 {
            (1..=total_pages).collect()
        } else if current <= 2 {
            vec![1, 2, 3]
        } else if current >= total_pages - 1 {
            vec![total_pages - 2, total_pages - 1, total_pages]
        } else {
            vec![current - 1, current, current + 1]
        }
    }
}
