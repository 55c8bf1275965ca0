//! Incremental, cursor-driven list cache.
//!
//! `Idle -> Fetching -> Idle` on success, `Idle -> Fetching -> Error` on
//! failure; a later `fetch_next` from `Error` is the retry. At most one fetch
//! is outstanding: a request made while `Fetching` is ignored, not queued.

use std::sync::Arc;
use tokio::sync::watch;

use crate::error::DexResult;
use crate::models::{ListEntry, PageCursor};
use crate::traits::CatalogueApi;

/// Where the next page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CursorState {
    /// Nothing loaded yet; ask for the first page.
    Start,
    At(PageCursor),
    /// The last loaded page had no continuation.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Fetching,
    Error,
}

/// Published list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub items: Vec<ListEntry>,
    pub is_loading: bool,
    pub error: Option<String>,
    cursor: CursorState,
    session: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
            cursor: CursorState::Start,
            session: 0,
        }
    }
}

impl ListState {
    pub fn phase(&self) -> ListPhase {
        if self.is_loading {
            ListPhase::Fetching
        } else if self.error.is_some() {
            ListPhase::Error
        } else {
            ListPhase::Idle
        }
    }

    /// True once a page without continuation has been appended.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == CursorState::Exhausted
    }

    /// Cursor the next fetch will use; `None` before the first page and after
    /// the last.
    pub fn next_cursor(&self) -> Option<&PageCursor> {
        match &self.cursor {
            CursorState::At(cursor) => Some(cursor),
            _ => None,
        }
    }
}

/// What a `fetch_next` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page arrived and this many items were appended.
    Appended(usize),
    /// Another fetch was already outstanding; nothing was requested.
    InFlight,
    /// The listing is exhausted; nothing was requested.
    Exhausted,
    /// The cache was reset while this fetch was outstanding; its result was
    /// thrown away.
    Discarded,
}

/// Accumulated remote list for one listing session.
#[derive(Clone)]
pub struct PaginatedListCache {
    api: Arc<dyn CatalogueApi>,
    state: Arc<watch::Sender<ListState>>,
}

impl PaginatedListCache {
    pub fn new(api: Arc<dyn CatalogueApi>) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self {
            api,
            state: Arc::new(state),
        }
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    /// Drop everything loaded so far and start a fresh listing. A fetch still
    /// outstanding from the previous listing is discarded when it resolves.
    pub fn reset(&self) {
        self.state.send_modify(|state| {
            let session = state.session + 1;
            *state = ListState {
                session,
                ..ListState::default()
            };
        });
        tracing::debug!("list cache reset");
    }

    /// Fetch and append the next page.
    ///
    /// On failure the error is both published and returned; the items already
    /// loaded are left untouched and the cursor is not advanced, so calling
    /// again retries the same page.
    pub async fn fetch_next(&self) -> DexResult<FetchOutcome> {
        let mut skipped = FetchOutcome::InFlight;
        let mut started = None;
        self.state.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            let cursor = match &state.cursor {
                CursorState::Exhausted => {
                    skipped = FetchOutcome::Exhausted;
                    return false;
                }
                CursorState::Start => None,
                CursorState::At(cursor) => Some(cursor.clone()),
            };
            state.is_loading = true;
            state.error = None;
            started = Some((state.session, cursor));
            true
        });

        let Some((session, cursor)) = started else {
            tracing::trace!(?skipped, "fetch_next skipped");
            return Ok(skipped);
        };

        tracing::debug!(cursor = ?cursor.as_ref().map(PageCursor::as_str), "fetching page");
        let result = self.api.list_page(cursor.as_ref()).await;

        let mut outcome = Ok(FetchOutcome::Discarded);
        self.state.send_if_modified(|state| {
            if state.session != session {
                return false;
            }
            state.is_loading = false;
            match result {
                Ok(page) => {
                    outcome = Ok(FetchOutcome::Appended(page.items.len()));
                    state.items.extend(page.items);
                    state.cursor = match page.next_cursor {
                        Some(next) => CursorState::At(next),
                        None => CursorState::Exhausted,
                    };
                }
                Err(err) => {
                    tracing::warn!(error = %err, code = err.error_code(), "page fetch failed");
                    state.error = Some(err.user_message());
                    outcome = Err(err);
                }
            }
            true
        });

        if let Ok(FetchOutcome::Discarded) = outcome {
            tracing::debug!("page arrived after reset, discarded");
        }
        outcome
    }

    /// Re-run the fetch that last failed.
    pub async fn retry(&self) -> DexResult<FetchOutcome> {
        self.fetch_next().await
    }
}

impl std::fmt::Debug for PaginatedListCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedListCache")
            .field("state", &*self.state.borrow())
            .finish()
    }
}
