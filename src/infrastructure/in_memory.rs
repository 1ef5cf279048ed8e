use crate::domain::ports::KeyValueStore;
use crate::error::StoreError;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

/// An ephemeral in-memory key-value store.
///
/// `Clone` shares the underlying map, so two handles over the same store see
/// each other's writes. State lives only as long as the process, which makes
/// this the session-scoped counterpart of the persistent store and the fake
/// used throughout the tests.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::IoError(io::Error::other("store mutex poisoned")))
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.entries()?.clear();
        Ok(())
    }
}
