use thiserror::Error;

pub type Result<T> = std::result::Result<T, BasketError>;

/// Failures surfaced by the persistence adapter and the storage selector.
///
/// The basket engine itself is total over well-formed input and has no error
/// paths; everything here originates at the storage boundary. Adapter
/// variants carry the high-level operation name so callers can tell which
/// basket operation could not complete.
#[derive(Error, Debug)]
pub enum BasketError {
    #[error("{op}: malformed basket snapshot: {source}")]
    MalformedSnapshot {
        op: &'static str,
        source: serde_json::Error,
    },
    #[error("{op}: store unavailable: {source}")]
    StoreUnavailable {
        op: &'static str,
        source: StoreError,
    },
    #[error("select a valid storage type: {0}")]
    UnknownStoreKind(String),
    #[error("storage configuration error: {0}")]
    StorageConfig(String),
    #[error("operation error: {0}")]
    OperationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Errors raised inside a key-value store implementation, before the adapter
/// attaches the operation name.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    RocksDbError(#[from] rocksdb::Error),
}
