//! Single-entry detail fetch with localized ability names.
//!
//! A fetch resolves the primary record, fans out one localized-name lookup
//! per ability, waits for all of them, and only then publishes the merged
//! entry. A lookup that fails or has no name in the requested language falls
//! back to the ability's default name. Each call takes a request number; a
//! fetch that is no longer the latest request never publishes.

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::{DexError, DexResult};
use crate::models::{normalize_query, Entry, NamedResource};
use crate::traits::CatalogueApi;

/// Published details state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsState {
    /// Normalized key of the latest request.
    pub key: Option<String>,
    pub entry: Option<Entry>,
    pub loading: bool,
    pub error: Option<String>,
    request: u64,
}

#[derive(Clone)]
pub struct DetailsFetchCoordinator {
    api: Arc<dyn CatalogueApi>,
    language: String,
    state: Arc<watch::Sender<DetailsState>>,
}

impl DetailsFetchCoordinator {
    pub fn new(api: Arc<dyn CatalogueApi>, language: impl Into<String>) -> Self {
        let (state, _) = watch::channel(DetailsState::default());
        Self {
            api,
            language: language.into(),
            state: Arc::new(state),
        }
    }

    pub fn state(&self) -> DetailsState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailsState> {
        self.state.subscribe()
    }

    /// Fetch, localize and publish the entry for a name or numeric id.
    ///
    /// The merged entry is returned to the caller even when a newer request
    /// has superseded this one; it is just not published.
    pub async fn fetch_details(&self, name_or_id: &str) -> DexResult<Entry> {
        let key = normalize_query(name_or_id)
            .ok_or_else(|| DexError::client("Enter a name or number to search."))?;

        let mut request = 0;
        self.state.send_modify(|state| {
            state.request += 1;
            request = state.request;
            state.key = Some(key.clone());
            state.entry = None;
            state.loading = true;
            state.error = None;
        });
        tracing::debug!(%key, request, "details fetch started");

        let record = match self.api.get_details(&key).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(%key, error = %err, code = err.error_code(), "details fetch failed");
                let message = err.user_message();
                self.publish(request, |state| {
                    state.loading = false;
                    state.error = Some(message);
                });
                return Err(err);
            }
        };

        let ability_names =
            join_all(record.abilities.iter().map(|ability| self.localize(ability))).await;
        let entry = record.into_entry(ability_names);

        let published = entry.clone();
        let current = self.publish(request, move |state| {
            state.loading = false;
            state.entry = Some(published);
        });
        if current {
            tracing::debug!(%key, id = entry.id, "details published");
        } else {
            tracing::debug!(%key, request, "superseded details fetch discarded");
        }
        Ok(entry)
    }

    /// Localized display name of one ability, or its default name.
    async fn localize(&self, ability: &NamedResource) -> String {
        match self
            .api
            .get_localized_name(&ability.reference, &self.language)
            .await
        {
            Ok(Some(name)) => name,
            Ok(None) => ability.name.clone(),
            Err(err) => {
                tracing::debug!(ability = %ability.name, error = %err, "localized name fallback");
                ability.name.clone()
            }
        }
    }

    /// Apply `update` only if `request` is still the latest request.
    fn publish(&self, request: u64, update: impl FnOnce(&mut DetailsState)) -> bool {
        self.state.send_if_modified(|state| {
            if state.request != request {
                return false;
            }
            update(state);
            true
        })
    }
}

impl std::fmt::Debug for DetailsFetchCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailsFetchCoordinator")
            .field("language", &self.language)
            .field("state", &*self.state.borrow())
            .finish()
    }
}
