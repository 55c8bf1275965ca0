//! Scripted catalogue for state-layer tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::gate::Gate;
use crate::error::{DexError, DexResult, NetworkError};
use crate::models::{EntryRecord, Page, PageCursor};
use crate::traits::CatalogueApi;

/// Key under which the first page (no cursor) is scripted.
pub const FIRST_PAGE: &str = "";

/// A catalogue whose every answer is scripted up front.
///
/// Pages are keyed by cursor token ([`FIRST_PAGE`] for the first page),
/// details by the lower-cased lookup key and localized names by
/// `(reference, language)`. Any key may be given a [`Gate`] to hold the call
/// at its suspension point until the test opens it.
#[derive(Debug, Clone, Default)]
pub struct MockCatalogue {
    pages: Arc<Mutex<HashMap<String, DexResult<Page>>>>,
    details: Arc<Mutex<HashMap<String, DexResult<EntryRecord>>>>,
    names: Arc<Mutex<HashMap<(String, String), DexResult<Option<String>>>>>,
    gates: Arc<Mutex<HashMap<String, Gate>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page(&self, cursor: &str, page: Page) {
        self.pages
            .lock()
            .unwrap()
            .insert(cursor.to_string(), Ok(page));
    }

    pub fn fail_page(&self, cursor: &str, error: DexError) {
        self.pages
            .lock()
            .unwrap()
            .insert(cursor.to_string(), Err(error));
    }

    pub fn set_details(&self, key: &str, record: EntryRecord) {
        self.details
            .lock()
            .unwrap()
            .insert(key.to_lowercase(), Ok(record));
    }

    pub fn fail_details(&self, key: &str, error: DexError) {
        self.details
            .lock()
            .unwrap()
            .insert(key.to_lowercase(), Err(error));
    }

    pub fn set_localized_name(&self, reference: &str, language: &str, name: Option<&str>) {
        self.names.lock().unwrap().insert(
            (reference.to_string(), language.to_string()),
            Ok(name.map(str::to_string)),
        );
    }

    pub fn fail_localized_name(&self, reference: &str, language: &str, error: DexError) {
        self.names
            .lock()
            .unwrap()
            .insert((reference.to_string(), language.to_string()), Err(error));
    }

    /// Hold calls for `key` (cursor, detail key or reference) until `gate` opens.
    pub fn gate(&self, key: &str, gate: Gate) {
        self.gates.lock().unwrap().insert(key.to_string(), gate);
    }

    /// Every call made, as `list:<cursor>`, `details:<key>` or `name:<reference>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    async fn enter(&self, call: String, key: &str) {
        self.calls.lock().unwrap().push(call);
        let gate = self.gates.lock().unwrap().get(key).cloned();
        if let Some(gate) = gate {
            gate.wait().await;
        }
    }

    fn unscripted(what: &str) -> DexError {
        NetworkError::Other {
            message: format!("no scripted response for {}", what),
        }
        .into()
    }
}

#[async_trait]
impl CatalogueApi for MockCatalogue {
    async fn list_page(&self, cursor: Option<&PageCursor>) -> DexResult<Page> {
        let key = cursor.map(PageCursor::as_str).unwrap_or(FIRST_PAGE);
        self.enter(format!("list:{}", key), key).await;
        self.pages
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_else(|| Err(Self::unscripted(&format!("page '{}'", key))))
    }

    async fn get_details(&self, name_or_id: &str) -> DexResult<EntryRecord> {
        let key = name_or_id.trim().to_lowercase();
        self.enter(format!("details:{}", key), &key).await;
        self.details
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(DexError::not_found(name_or_id)))
    }

    async fn get_localized_name(
        &self,
        reference: &str,
        language: &str,
    ) -> DexResult<Option<String>> {
        self.enter(format!("name:{}", reference), reference).await;
        self.names
            .lock()
            .unwrap()
            .get(&(reference.to_string(), language.to_string()))
            .cloned()
            .unwrap_or_else(|| Err(Self::unscripted(reference)))
    }
}
