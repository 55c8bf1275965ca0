//! File-backed key-value store.
//!
//! Each key maps to one file under the data directory. Writes go to a sibling
//! temp file that is then renamed over the target, so a crash mid-write leaves
//! the previous value intact.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// File extension for stored values.
const VALUE_EXT: &str = "json";

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding the value for `key`. Characters outside `[A-Za-z0-9_-]`
    /// are replaced so keys like `@pokedex_favorites` map to a safe file name.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{}.{}", file_name, VALUE_EXT))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                message: err.to_string(),
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_failed = |err: std::io::Error| StorageError::WriteFailed {
            key: key.to_string(),
            message: err.to_string(),
        };

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(write_failed)?;

        let target = self.path_for(key);
        let staging = target.with_extension("tmp");
        tokio::fs::write(&staging, value).await.map_err(write_failed)?;
        tokio::fs::rename(&staging, &target)
            .await
            .map_err(write_failed)?;
        Ok(())
    }
}
