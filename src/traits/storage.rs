//! Key-value persistence trait abstraction.

use async_trait::async_trait;

use crate::error::StorageError;

/// The persistence collaborator: a flat string-to-string store.
///
/// Implementations are [`FileKeyValueStore`](crate::adapters::FileKeyValueStore)
/// and [`InMemoryStore`](crate::adapters::mock::InMemoryStore) for tests.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if a value is stored
    /// - `Ok(None)` if nothing was ever written
    /// - `Err(error)` if the read itself failed
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
