//! In-memory key-value store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::gate::Gate;
use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// Key-value store held in memory, with switches for failure injection and a
/// log of every completed write.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<Vec<String>>>,
    get_should_fail: Arc<Mutex<bool>>,
    set_should_fail: Arc<Mutex<bool>>,
    set_gate: Arc<Mutex<Option<Gate>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Current raw value under `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Values of every completed `set`, in completion order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn set_get_should_fail(&self, fail: bool) {
        *self.get_should_fail.lock().unwrap() = fail;
    }

    pub fn set_set_should_fail(&self, fail: bool) {
        *self.set_should_fail.lock().unwrap() = fail;
    }

    /// Hold every subsequent `set` until `gate` opens.
    pub fn hold_writes(&self, gate: Gate) {
        *self.set_gate.lock().unwrap() = Some(gate);
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if *self.get_should_fail.lock().unwrap() {
            return Err(StorageError::ReadFailed {
                key: key.to_string(),
                message: "injected read failure".to_string(),
            });
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let gate = self.set_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.wait().await;
        }
        if *self.set_should_fail.lock().unwrap() {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "injected write failure".to_string(),
            });
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.writes.lock().unwrap().push(value.to_string());
        Ok(())
    }
}
