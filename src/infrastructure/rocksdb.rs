use crate::domain::ports::KeyValueStore;
use crate::error::StoreError;
use rocksdb::{DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// A persistent key-value store backed by RocksDB.
///
/// This is the durable counterpart of `InMemoryStore`: snapshots survive
/// process restarts. `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DB::open(&opts, path)?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl KeyValueStore for RocksDbStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.db.get(key.as_bytes())?)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.db.put(key.as_bytes(), value)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        // localStorage.clear() semantics: every key goes, related or not.
        for entry in self.db.iterator(IteratorMode::Start) {
            let (key, _value) = entry?;
            self.db.delete(key)?;
        }
        Ok(())
    }
}
