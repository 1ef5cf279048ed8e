use crate::error::StoreError;

/// Port for the underlying key-value store a basket snapshot lives in.
///
/// Modeled as an explicit dependency rather than ambient global state so the
/// persistence adapter can be exercised against an in-memory fake. `clear`
/// wipes the whole store, not just the basket key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

pub type KeyValueStoreBox = Box<dyn KeyValueStore>;
