use crate::domain::ports::KeyValueStoreBox;
use crate::error::{BasketError, Result};
use crate::infrastructure::in_memory::InMemoryStore;
#[cfg(feature = "storage-rocksdb")]
use crate::infrastructure::rocksdb::RocksDbStore;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// The storage backends a basket can be persisted in.
///
/// `RocksDb` is only available with the `storage-rocksdb` feature; without
/// it, parsing `"rocksdb"` fails the same way any unknown name does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    #[cfg(feature = "storage-rocksdb")]
    RocksDb,
}

impl FromStr for StoreKind {
    type Err = BasketError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memory" => Ok(Self::Memory),
            #[cfg(feature = "storage-rocksdb")]
            "rocksdb" => Ok(Self::RocksDb),
            other => Err(BasketError::UnknownStoreKind(other.to_string())),
        }
    }
}

/// Builds the key-value store for the requested kind.
///
/// `db_path` is required for persistent backends and ignored otherwise.
#[cfg_attr(not(feature = "storage-rocksdb"), allow(unused_variables))]
pub fn create_store(kind: StoreKind, db_path: Option<&Path>) -> Result<KeyValueStoreBox> {
    debug!(?kind, "creating key-value store");
    match kind {
        StoreKind::Memory => Ok(Box::new(InMemoryStore::new())),
        #[cfg(feature = "storage-rocksdb")]
        StoreKind::RocksDb => {
            let path = db_path.ok_or_else(|| {
                BasketError::StorageConfig("rocksdb storage requires a database path".to_string())
            })?;
            let store = RocksDbStore::open(path)
                .map_err(|source| BasketError::StoreUnavailable { op: "open", source })?;
            Ok(Box::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::KeyValueStore;

    #[test]
    fn test_parse_memory_kind() {
        assert_eq!("memory".parse::<StoreKind>().unwrap(), StoreKind::Memory);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "localstorage".parse::<StoreKind>().unwrap_err();
        assert!(matches!(err, BasketError::UnknownStoreKind(_)));
        assert_eq!(
            err.to_string(),
            "select a valid storage type: localstorage"
        );
    }

    #[test]
    fn test_create_memory_store() {
        let store = create_store(StoreKind::Memory, None).unwrap();
        store.put("basket", b"{}").unwrap();
        assert_eq!(store.get("basket").unwrap(), Some(b"{}".to_vec()));
    }

    #[cfg(feature = "storage-rocksdb")]
    #[test]
    fn test_rocksdb_requires_db_path() {
        let err = create_store(StoreKind::RocksDb, None).unwrap_err();
        assert!(matches!(err, BasketError::StorageConfig(_)));
    }

    #[cfg(feature = "storage-rocksdb")]
    #[test]
    fn test_create_rocksdb_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = create_store(StoreKind::RocksDb, Some(dir.path())).unwrap();
        store.put("basket", b"{}").unwrap();
        assert_eq!(store.get("basket").unwrap(), Some(b"{}".to_vec()));
    }
}
