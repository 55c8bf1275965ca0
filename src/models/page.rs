use serde::{Deserialize, Serialize};

use super::entry::ListEntry;

/// Opaque continuation token handed back by the remote list endpoint.
///
/// Never interpreted, only threaded through to the next `list_page` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<ListEntry>,
    /// `None` once the listing is exhausted.
    pub next_cursor: Option<PageCursor>,
}

impl Page {
    pub fn new(items: Vec<ListEntry>, next_cursor: Option<PageCursor>) -> Self {
        Self { items, next_cursor }
    }
}
