use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::KeyValueStore;
use crate::error::{DutyLogError, Result};

/// In-process key-value store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob, e.g. with hand-written or corrupted content.
    pub fn with_blob(self, key: &str, value: &str) -> Self {
        if let Ok(mut blobs) = self.blobs.lock() {
            blobs.insert(key.to_string(), value.to_string());
        }
        self
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.blobs
            .lock()
            .map_err(|_| DutyLogError::Storage("Memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
