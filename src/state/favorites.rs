//! Persistent favorites set.
//!
//! The in-memory set is the source of truth; the key-value store is a
//! best-effort copy. Every mutation bumps a revision and wakes a single writer
//! task, which serializes whatever the set looks like when it gets to run.
//! Mutations that land while a write is in flight are coalesced into the next
//! write, and writes complete in revision order, so an older snapshot can
//! never overwrite a newer one.

use std::sync::Arc;
use tokio::sync::watch;

use crate::models::Entry;
use crate::traits::KeyValueStore;

/// Storage key of the favorites blob.
pub const FAVORITES_KEY: &str = "@pokedex_favorites";

/// Favorited entries keyed by id, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    entries: Vec<Entry>,
    revision: u64,
}

impl FavoriteSet {
    /// Build a set from persisted entries. A repeated id keeps its first
    /// position and its last value.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut set = Self::default();
        for entry in entries {
            set.upsert(entry);
        }
        set
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn get(&self, id: u32) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monotonic mutation counter for this process.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn upsert(&mut self, entry: Entry) {
        match self.entries.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }
}

struct Shared {
    state: watch::Sender<FavoriteSet>,
    persisted: watch::Receiver<u64>,
}

/// Handle to the favorites set. Cheap to clone; all clones share one set.
///
/// Created once per process with [`FavoritesStore::hydrate`], which must run
/// inside a tokio runtime because it spawns the writer task.
#[derive(Clone)]
pub struct FavoritesStore {
    shared: Arc<Shared>,
}

impl FavoritesStore {
    /// Read the persisted blob. Never fails: a read error or a malformed blob
    /// yields an empty set.
    pub async fn load(store: &dyn KeyValueStore) -> FavoriteSet {
        let raw = match store.get(FAVORITES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return FavoriteSet::default(),
            Err(err) => {
                tracing::warn!(error = %err, "favorites read failed, starting empty");
                return FavoriteSet::default();
            }
        };

        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => FavoriteSet::from_entries(entries),
            Err(err) => {
                tracing::warn!(error = %err, "favorites blob malformed, starting empty");
                FavoriteSet::default()
            }
        }
    }

    /// Load the persisted set once and start the writer.
    pub async fn hydrate(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = Self::load(store.as_ref()).await;
        tracing::info!(count = initial.len(), "favorites hydrated");

        let (state_tx, state_rx) = watch::channel(initial);
        let (persisted_tx, persisted_rx) = watch::channel(0);
        tokio::spawn(run_writer(store, state_rx, persisted_tx));

        Self {
            shared: Arc::new(Shared {
                state: state_tx,
                persisted: persisted_rx,
            }),
        }
    }

    /// Insert or overwrite `entry` by id and schedule a write.
    pub fn add(&self, entry: Entry) -> FavoriteSet {
        tracing::debug!(id = entry.id, name = %entry.name, "favorite added");
        self.shared.state.send_modify(|set| {
            set.upsert(entry);
            set.revision += 1;
        });
        self.snapshot()
    }

    /// Remove `id` if present and schedule a write. Removing an absent id
    /// changes nothing and writes nothing.
    pub fn remove(&self, id: u32) -> FavoriteSet {
        let removed = self.shared.state.send_if_modified(|set| {
            if set.remove(id) {
                set.revision += 1;
                true
            } else {
                false
            }
        });
        if removed {
            tracing::debug!(id, "favorite removed");
        }
        self.snapshot()
    }

    /// Remove the entry if it is a favorite, add it otherwise. Returns the
    /// new membership.
    pub fn toggle(&self, entry: Entry) -> bool {
        if self.is_favorite(entry.id) {
            self.remove(entry.id);
            false
        } else {
            self.add(entry);
            true
        }
    }

    /// Membership against in-memory state only.
    pub fn is_favorite(&self, id: u32) -> bool {
        self.shared.state.borrow().contains(id)
    }

    pub fn snapshot(&self) -> FavoriteSet {
        self.shared.state.borrow().clone()
    }

    /// Display-ordered entries.
    pub fn entries(&self) -> Vec<Entry> {
        self.shared.state.borrow().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.shared.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.state.borrow().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<FavoriteSet> {
        self.shared.state.subscribe()
    }

    /// Wait until the write covering the latest mutation has settled, whether
    /// it landed or was dropped.
    pub async fn flush(&self) {
        let target = self.shared.state.borrow().revision;
        let mut persisted = self.shared.persisted.clone();
        // An error means the writer is gone, so there is nothing left to wait for.
        let _ = persisted.wait_for(|revision| *revision >= target).await;
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let set = self.shared.state.borrow();
        f.debug_struct("FavoritesStore")
            .field("len", &set.len())
            .field("revision", &set.revision)
            .finish()
    }
}

/// Writes the latest snapshot each time the set changes. Exits once every
/// store handle is dropped and the final change has been written.
async fn run_writer(
    store: Arc<dyn KeyValueStore>,
    mut state: watch::Receiver<FavoriteSet>,
    persisted: watch::Sender<u64>,
) {
    while state.changed().await.is_ok() {
        let (revision, blob) = {
            let set = state.borrow_and_update();
            (set.revision, serde_json::to_string(&set.entries))
        };

        match blob {
            Ok(blob) => {
                if let Err(err) = store.set(FAVORITES_KEY, &blob).await {
                    tracing::warn!(revision, error = %err, "favorites write dropped");
                } else {
                    tracing::trace!(revision, "favorites written");
                }
            }
            Err(err) => tracing::warn!(revision, error = %err, "favorites not serializable"),
        }

        persisted.send_replace(revision);
    }
    tracing::debug!("favorites writer stopped");
}
